mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stainlab", about = "Stained image statistics and square cropping")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and channel layout
    Info(commands::info::InfoArgs),
    /// Binarize images and report positive/negative pixel percentages
    Binary(commands::binary::BinaryArgs),
    /// Report the mean grayscale intensity of images
    Intensity(commands::intensity::IntensityArgs),
    /// Cut a square patch around a point at full resolution
    Crop(commands::crop::CropArgs),
    /// Save an image fitted into a viewport
    Preview(commands::preview::PreviewArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = commands::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Info(args) => commands::info::run(args, &config),
        Commands::Binary(args) => commands::binary::run(args, &config),
        Commands::Intensity(args) => commands::intensity::run(args),
        Commands::Crop(args) => commands::crop::run(args, &config),
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
