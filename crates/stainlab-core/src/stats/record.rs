use ndarray::Array2;

use crate::consts::{
    COLUMN_AVERAGE_INTENSITY, COLUMN_IMAGE_NAME, COLUMN_NEGATIVE_PERCENT, COLUMN_POSITIVE_PERCENT,
    COLUMN_TOTAL_PIXELS,
};
use crate::error::Result;

use super::intensity::mean_intensity;
use super::threshold::BinaryOutcome;

/// Statistics for one processed image, one spreadsheet row.
#[derive(Clone, Debug, PartialEq)]
pub struct StatRecord {
    pub image_name: String,
    pub total_pixels: u64,
    /// Named metrics in column order.
    pub metrics: Vec<(String, f64)>,
}

impl StatRecord {
    pub fn new(image_name: impl Into<String>, total_pixels: u64) -> Self {
        Self {
            image_name: image_name.into(),
            total_pixels,
            metrics: Vec::new(),
        }
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.push((name.into(), value));
        self
    }

    /// Column headers: image name, total pixels, then metrics in order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = vec![COLUMN_IMAGE_NAME, COLUMN_TOTAL_PIXELS];
        columns.extend(self.metrics.iter().map(|(name, _)| name.as_str()));
        columns
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }
}

/// Positive (at or above threshold) and negative pixel percentages.
pub fn binary_record(image_name: &str, outcome: &BinaryOutcome) -> Result<StatRecord> {
    Ok(StatRecord::new(image_name, outcome.total())
        .with_metric(COLUMN_POSITIVE_PERCENT, outcome.high_percent()?)
        .with_metric(COLUMN_NEGATIVE_PERCENT, outcome.low_percent()?))
}

/// Mean grayscale intensity, on the buffer's own scale.
pub fn intensity_record<T: Copy + Into<u64>>(image_name: &str, gray: &Array2<T>) -> Result<StatRecord> {
    Ok(StatRecord::new(image_name, gray.len() as u64)
        .with_metric(COLUMN_AVERAGE_INTENSITY, mean_intensity(gray)?))
}
