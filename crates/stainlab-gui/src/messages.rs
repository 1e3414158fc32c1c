use std::path::PathBuf;

use stainlab_core::config::StainlabConfig;
use stainlab_core::raster::SourceImage;
use stainlab_core::stats::StatRecord;

/// Where a loaded image should go.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadTarget {
    /// Analyzer slot (0-based).
    Slot(usize),
    Selector,
}

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file.
    LoadImage { path: PathBuf, target: LoadTarget },

    /// Encode an image (format from the path's extension).
    SaveImage { path: PathBuf, image: SourceImage },

    /// Write statistics of the last analysis run to a spreadsheet.
    ExportStats {
        path: PathBuf,
        records: Vec<StatRecord>,
    },
}

/// Results sent from worker (and dialog) threads back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        target: LoadTarget,
        name: String,
        image: SourceImage,
    },
    LoadFailed {
        target: LoadTarget,
        message: String,
    },
    ImageSaved {
        path: PathBuf,
    },
    StatsExported {
        path: PathBuf,
    },
    ConfigImported {
        config: StainlabConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
