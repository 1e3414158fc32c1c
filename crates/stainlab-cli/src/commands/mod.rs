pub mod binary;
pub mod config;
pub mod crop;
pub mod info;
pub mod intensity;
pub mod preview;

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use stainlab_core::config::StainlabConfig;

/// Load the config file if one was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Result<StainlabConfig> {
    match path {
        Some(path) => StainlabConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(StainlabConfig::default()),
    }
}

/// File name shown in tables and spreadsheets.
pub fn image_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn progress_bar(len: usize, message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message(message);
    Ok(pb)
}

/// Viewport size given as `WIDTHxHEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let width = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
        let height = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
        if width == 0 || height == 0 {
            return Err("viewport dimensions must be > 0".into());
        }
        Ok(Self { width, height })
    }
}
