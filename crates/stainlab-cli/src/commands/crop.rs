use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stainlab_core::config::StainlabConfig;
use stainlab_core::io::image_io::{load_source_image, save_source_image};
use stainlab_core::session::SelectorSession;
use tracing::warn;

use super::{image_name, Viewport};

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    /// Center X (source pixels, or display pixels with --viewport)
    #[arg(long)]
    pub x: f64,

    /// Center Y (source pixels, or display pixels with --viewport)
    #[arg(long)]
    pub y: f64,

    /// Square side in pixels [default: from config]
    #[arg(long)]
    pub size: Option<u32>,

    /// Preview viewport as WIDTHxHEIGHT; X/Y are then positions in the fitted preview
    #[arg(long)]
    pub viewport: Option<Viewport>,

    /// Output file (format from extension: png, jpg, tif, bmp)
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: &CropArgs, config: &StainlabConfig) -> Result<()> {
    let image = load_source_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    // Without a viewport the preview is the image itself (scale 1).
    let viewport = args.viewport.unwrap_or(Viewport {
        width: image.width(),
        height: image.height(),
    });

    let mut session = SelectorSession::new(&config.selector);
    session.resize_viewport(viewport.width, viewport.height);
    session.load(image_name(&args.file), image);

    let requested = args.size.unwrap_or(config.selector.default_side);
    let side = session.set_side(requested)?;
    if let Some(msg) = clamp_warning(requested, side, session.side_range()) {
        warn!("{msg}");
    }
    let rect = session.click(args.x, args.y)?;
    let patch = session.crop()?;

    save_source_image(&patch, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    println!(
        "Saved {side}x{side} patch ({},{})-({},{}) to {}",
        rect.left,
        rect.top,
        rect.right,
        rect.bottom,
        args.output.display()
    );
    Ok(())
}

/// Message for a requested side that the selector range overrode.
fn clamp_warning(requested: u32, side: u32, (min_side, max_side): (u32, u32)) -> Option<String> {
    (requested != side).then(|| {
        format!("Size {requested} is outside {min_side}..={max_side}, using {side}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_warning_only_when_side_changed() {
        assert_eq!(clamp_warning(200, 200, (20, 2000)), None);
        assert_eq!(
            clamp_warning(10, 20, (20, 2000)).as_deref(),
            Some("Size 10 is outside 20..=2000, using 20")
        );
    }
}
