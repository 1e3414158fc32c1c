use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stainlab_core::io::export::write_xlsx;
use stainlab_core::io::image_io::load_source_image;
use stainlab_core::stats::{intensity_record, to_intensity_gray};

use super::{image_name, progress_bar};

#[derive(Args)]
pub struct IntensityArgs {
    /// Input image files, processed in the order given
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write the statistics to an .xlsx file
    #[arg(long)]
    pub xlsx: Option<PathBuf>,
}

pub fn run(args: &IntensityArgs) -> Result<()> {
    let pb = progress_bar(args.files.len(), "Measuring")?;

    let mut records = Vec::with_capacity(args.files.len());
    for (i, path) in args.files.iter().enumerate() {
        let image = load_source_image(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        records.push(intensity_record(&image_name(path), &to_intensity_gray(&image)?)?);
        pb.set_position(i as u64 + 1);
    }
    pb.finish_with_message("Measured");

    println!("\n{:<32}  {:>12}  {:>10}", "Image", "Total", "Mean");
    println!("{}", "-".repeat(58));
    for record in &records {
        println!(
            "{:<32}  {:>12}  {:>10.2}",
            record.image_name, record.total_pixels, record.metrics[0].1
        );
    }

    if let Some(ref path) = args.xlsx {
        write_xlsx(&records, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nStatistics saved to {}", path.display());
    }

    Ok(())
}
