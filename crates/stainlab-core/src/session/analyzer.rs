use std::fmt;
use std::path::Path;

use ndarray::Array2;
use tracing::info;

use crate::error::{Result, StainlabError};
use crate::io::export::write_xlsx;
use crate::raster::SourceImage;
use crate::stats::{
    binarize, binary_record, intensity_record, to_grayscale, to_intensity_gray, StatRecord,
};

/// An image loaded into an analyzer slot, with its grayscale reductions:
/// 8-bit for binarization and native depth for intensity.
pub struct AnalyzerSlot {
    pub name: String,
    pub image: SourceImage,
    pub gray: Array2<u8>,
    pub intensity: Array2<u16>,
}

/// Per-slot outcome of an analysis run, formatted for the summary panel.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotSummary {
    NotLoaded {
        slot: usize,
    },
    Binary {
        slot: usize,
        name: String,
        total_pixels: u64,
        positive_percent: f64,
        negative_percent: f64,
    },
    Intensity {
        slot: usize,
        name: String,
        mean: f64,
    },
}

impl fmt::Display for SlotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLoaded { slot } => write!(f, "Image {}: Not loaded", slot + 1),
            Self::Binary {
                slot,
                name,
                total_pixels,
                positive_percent,
                negative_percent,
            } => write!(
                f,
                "Image {} ({name}): Total: {total_pixels}, +: {positive_percent:.2}%, -: {negative_percent:.2}%",
                slot + 1
            ),
            Self::Intensity { slot, name, mean } => {
                write!(f, "Image {} ({name}): {mean:.2}", slot + 1)
            }
        }
    }
}

/// State of a multi-slot analyzer: loaded images, their binarized outputs
/// and the statistics of the last run.
pub struct AnalyzerSession {
    slots: Vec<Option<AnalyzerSlot>>,
    binaries: Vec<Option<Array2<u8>>>,
    records: Vec<StatRecord>,
}

impl AnalyzerSession {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: (0..slot_count).map(|_| None).collect(),
            binaries: vec![None; slot_count],
            records: Vec::new(),
        }
    }

    /// Load an image into a slot. Clears all computed statistics.
    pub fn load_slot(&mut self, slot: usize, name: impl Into<String>, image: SourceImage) -> Result<()> {
        self.check_slot(slot)?;
        let gray = to_grayscale(&image)?;
        let intensity = to_intensity_gray(&image)?;
        let name = name.into();
        info!("Slot {} loaded {name} ({}x{})", slot + 1, image.width(), image.height());

        self.slots[slot] = Some(AnalyzerSlot {
            name,
            image,
            gray,
            intensity,
        });
        self.binaries[slot] = None;
        self.records.clear();
        Ok(())
    }

    pub fn clear_slot(&mut self, slot: usize) -> Result<()> {
        self.check_slot(slot)?;
        self.slots[slot] = None;
        self.binaries[slot] = None;
        self.records.clear();
        Ok(())
    }

    /// Binarize every loaded slot in slot order and record positive/negative
    /// pixel percentages.
    pub fn run_binary(&mut self, threshold: u8) -> Result<Vec<SlotSummary>> {
        self.ensure_any_loaded()?;

        let mut summaries = Vec::with_capacity(self.slots.len());
        let mut binaries = vec![None; self.slots.len()];
        let mut records = Vec::new();

        for (i, slot) in self.slots.iter().enumerate() {
            let Some(slot) = slot else {
                summaries.push(SlotSummary::NotLoaded { slot: i });
                continue;
            };
            let outcome = binarize(&slot.gray, threshold);
            let record = binary_record(&slot.name, &outcome)?;
            summaries.push(SlotSummary::Binary {
                slot: i,
                name: slot.name.clone(),
                total_pixels: outcome.total(),
                positive_percent: outcome.high_percent()?,
                negative_percent: outcome.low_percent()?,
            });
            binaries[i] = Some(outcome.buffer);
            records.push(record);
        }

        info!("Binarized {} image(s) at threshold {threshold}", records.len());
        self.binaries = binaries;
        self.records = records;
        Ok(summaries)
    }

    /// Compute the mean grayscale intensity of every loaded slot in slot order.
    pub fn run_intensity(&mut self) -> Result<Vec<SlotSummary>> {
        self.ensure_any_loaded()?;

        let mut summaries = Vec::with_capacity(self.slots.len());
        let mut records = Vec::new();

        for (i, slot) in self.slots.iter().enumerate() {
            let Some(slot) = slot else {
                summaries.push(SlotSummary::NotLoaded { slot: i });
                continue;
            };
            let record = intensity_record(&slot.name, &slot.intensity)?;
            let mean = record.metrics[0].1;
            summaries.push(SlotSummary::Intensity {
                slot: i,
                name: slot.name.clone(),
                mean,
            });
            records.push(record);
        }

        info!("Measured intensity of {} image(s)", records.len());
        self.records = records;
        Ok(summaries)
    }

    /// Write the last run's statistics to an `.xlsx` file.
    pub fn export(&self, path: &Path) -> Result<()> {
        write_xlsx(&self.records, path)
    }

    pub fn records(&self) -> &[StatRecord] {
        &self.records
    }

    pub fn slot(&self, slot: usize) -> Option<&AnalyzerSlot> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn binary(&self, slot: usize) -> Option<&Array2<u8>> {
        self.binaries.get(slot).and_then(Option::as_ref)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    fn check_slot(&self, slot: usize) -> Result<()> {
        if slot >= self.slots.len() {
            return Err(StainlabError::SlotOutOfRange {
                slot,
                count: self.slots.len(),
            });
        }
        Ok(())
    }

    fn ensure_any_loaded(&self) -> Result<()> {
        if self.slots.iter().all(Option::is_none) {
            return Err(StainlabError::NoImageLoaded);
        }
        Ok(())
    }
}
