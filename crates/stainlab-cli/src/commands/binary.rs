use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stainlab_core::config::StainlabConfig;
use stainlab_core::io::export::write_xlsx;
use stainlab_core::io::image_io::{load_source_image, save_gray};
use stainlab_core::stats::{binarize, binary_record, to_grayscale};

use super::{image_name, progress_bar};

#[derive(Args)]
pub struct BinaryArgs {
    /// Input image files, processed in the order given
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Pixels at or above this value (0-255) count as positive [default: from config]
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Directory to save the binarized images into (as <name>_binary.png)
    #[arg(long)]
    pub save_binary: Option<PathBuf>,

    /// Write the statistics to an .xlsx file
    #[arg(long)]
    pub xlsx: Option<PathBuf>,
}

pub fn run(args: &BinaryArgs, config: &StainlabConfig) -> Result<()> {
    let threshold = args.threshold.unwrap_or(config.analysis.threshold);
    let pb = progress_bar(args.files.len(), "Binarizing")?;

    let mut records = Vec::with_capacity(args.files.len());
    for (i, path) in args.files.iter().enumerate() {
        let image = load_source_image(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        let outcome = binarize(&to_grayscale(&image)?, threshold);

        if let Some(ref dir) = args.save_binary {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("image{}", i + 1));
            save_gray(&outcome.buffer, &dir.join(format!("{stem}_binary.png")))?;
        }

        records.push(binary_record(&image_name(path), &outcome)?);
        pb.set_position(i as u64 + 1);
    }
    pb.finish_with_message(format!("Binarized at threshold {threshold}"));

    println!(
        "\n{:<32}  {:>12}  {:>10}  {:>10}",
        "Image", "Total", "+ (%)", "- (%)"
    );
    println!("{}", "-".repeat(70));
    for record in &records {
        println!(
            "{:<32}  {:>12}  {:>10.2}  {:>10.2}",
            record.image_name, record.total_pixels, record.metrics[0].1, record.metrics[1].1
        );
    }

    if let Some(ref path) = args.xlsx {
        write_xlsx(&records, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nStatistics saved to {}", path.display());
    }

    Ok(())
}
