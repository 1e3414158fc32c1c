use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StainlabError {
    #[error("Cannot read image {path}: {reason}")]
    UnreadableFile { path: PathBuf, reason: String },

    #[error("Unsupported image format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Unsupported channel layout: {channels} channels (expected 1, 3 or 4)")]
    UnsupportedChannelLayout { channels: usize },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Square of {side} px does not fit in a {width}x{height} image")]
    SizeExceedsImage { side: u32, width: u32, height: u32 },

    #[error(
        "Selection ({left},{top})-({right},{bottom}) is outside the {width}x{height} image"
    )]
    OutOfBounds {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        width: u32,
        height: u32,
    },

    #[error("No selection made")]
    NoSelection,

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("No statistics computed yet")]
    NoStatistics,

    #[error("Slot {slot} out of range (slots: {count})")]
    SlotOutOfRange { slot: usize, count: usize },

    #[error("Could not write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StainlabError>;
