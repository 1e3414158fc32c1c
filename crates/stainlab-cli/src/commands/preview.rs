use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stainlab_core::display::{compute_fit, preview};
use stainlab_core::io::image_io::{load_source_image, save_source_image};

use super::Viewport;

#[derive(Args)]
pub struct PreviewArgs {
    /// Input image file
    pub file: PathBuf,

    /// Viewport to fit into, as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600")]
    pub viewport: Viewport,

    /// Output file (format from extension)
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: &PreviewArgs) -> Result<()> {
    let image = load_source_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let fit = compute_fit(
        image.width(),
        image.height(),
        args.viewport.width,
        args.viewport.height,
    )?;
    let scaled = preview(&image, &fit)?;

    save_source_image(&scaled, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!(
        "Saved {}x{} preview (scale {:.3}) to {}",
        fit.display_width,
        fit.display_height,
        fit.scale,
        args.output.display()
    );
    Ok(())
}
