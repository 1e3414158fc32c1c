use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stainlab_core::config::StainlabConfig;
use stainlab_core::display::DisplayTransform;
use stainlab_core::io::image_io::load_source_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs, config: &StainlabConfig) -> Result<()> {
    let image = load_source_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let layout = match image.channel_depth() {
        1 => "gray",
        3 => "RGB",
        _ => "RGBA",
    };

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Channels:    {} ({})", image.channel_depth(), layout);
    println!("Bit depth:   {}", image.bit_depth());
    println!("Pixels:      {}", image.pixel_count());

    let [vw, vh] = config.selector.initial_viewport;
    let fit = DisplayTransform::for_image(&image, vw, vh);
    println!(
        "Fit {}x{}:  {}x{} (scale {:.3})",
        vw, vh, fit.display_width, fit.display_height, fit.scale
    );

    Ok(())
}
