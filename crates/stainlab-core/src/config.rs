use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_SLOT_COUNT, DEFAULT_SQUARE_SIDE, DEFAULT_THRESHOLD, DEFAULT_THUMBNAIL_SIZE,
    DEFAULT_VIEWPORT, MAX_SQUARE_SIDE, MIN_SQUARE_SIDE,
};
use crate::error::{Result, StainlabError};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StainlabConfig {
    pub analysis: AnalysisConfig,
    pub selector: SelectorConfig,
}

/// Settings for the binary and intensity analyzers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Pixels at or above this value count as positive.
    pub threshold: u8,
    /// Number of image slots.
    pub slots: usize,
    /// Edge of the box thumbnails are fitted into (pixels).
    pub thumbnail_size: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            slots: DEFAULT_SLOT_COUNT,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

/// Settings for the square selector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub default_side: u32,
    pub min_side: u32,
    pub max_side: u32,
    /// Viewport size used until the first resize notification.
    pub initial_viewport: [u32; 2],
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default_side: DEFAULT_SQUARE_SIDE,
            min_side: MIN_SQUARE_SIDE,
            max_side: MAX_SQUARE_SIDE,
            initial_viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl StainlabConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StainlabError::UnreadableFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| StainlabError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StainlabError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.analysis.slots == 0 {
            return Err(StainlabError::Config("analysis.slots must be > 0".into()));
        }
        if self.analysis.thumbnail_size == 0 {
            return Err(StainlabError::Config(
                "analysis.thumbnail_size must be > 0".into(),
            ));
        }
        let s = &self.selector;
        if s.min_side == 0 || s.min_side > s.max_side {
            return Err(StainlabError::Config(format!(
                "selector side range {}..={} is empty",
                s.min_side, s.max_side
            )));
        }
        if !(s.min_side..=s.max_side).contains(&s.default_side) {
            return Err(StainlabError::Config(format!(
                "selector.default_side {} outside {}..={}",
                s.default_side, s.min_side, s.max_side
            )));
        }
        Ok(())
    }
}
