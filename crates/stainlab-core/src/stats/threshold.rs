use ndarray::Array2;

use crate::consts::{BINARY_HIGH, BINARY_LOW};
use crate::error::Result;

use super::intensity::percentage;

/// Binarized buffer with per-class pixel counts.
#[derive(Clone, Debug)]
pub struct BinaryOutcome {
    /// Every element is `BINARY_LOW` or `BINARY_HIGH`.
    pub buffer: Array2<u8>,
    pub low_count: u64,
    pub high_count: u64,
}

impl BinaryOutcome {
    pub fn total(&self) -> u64 {
        self.low_count + self.high_count
    }

    /// Percentage of pixels at or above the threshold.
    pub fn high_percent(&self) -> Result<f64> {
        percentage(self.high_count, self.total())
    }

    /// Percentage of pixels below the threshold.
    pub fn low_percent(&self) -> Result<f64> {
        percentage(self.low_count, self.total())
    }
}

/// Fixed-threshold binarization. `value >= threshold` maps to `BINARY_HIGH`.
pub fn binarize(gray: &Array2<u8>, threshold: u8) -> BinaryOutcome {
    let buffer = gray.mapv(|v| if v >= threshold { BINARY_HIGH } else { BINARY_LOW });
    let high_count = buffer.iter().filter(|&&v| v == BINARY_HIGH).count() as u64;
    let low_count = buffer.len() as u64 - high_count;

    BinaryOutcome {
        buffer,
        low_count,
        high_count,
    }
}
