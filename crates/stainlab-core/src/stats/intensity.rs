use ndarray::Array2;

use crate::error::{Result, StainlabError};

/// `100 * count / total`. An empty population is rejected.
pub fn percentage(count: u64, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(StainlabError::EmptyImage);
    }
    Ok(100.0 * count as f64 / total as f64)
}

/// Arithmetic mean of all pixel values, on the samples' own scale
/// (0-255 for 8-bit, 0-65535 for 16-bit buffers).
pub fn mean_intensity<T: Copy + Into<u64>>(gray: &Array2<T>) -> Result<f64> {
    if gray.is_empty() {
        return Err(StainlabError::EmptyImage);
    }
    let sum: u64 = gray.iter().map(|&v| Into::<u64>::into(v)).sum();
    Ok(sum as f64 / gray.len() as f64)
}
