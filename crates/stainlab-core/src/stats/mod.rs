pub mod grayscale;
pub mod intensity;
pub mod record;
pub mod threshold;

pub use grayscale::{reduce_channels, reduce_channels16, to_grayscale, to_intensity_gray};
pub use intensity::{mean_intensity, percentage};
pub use record::{binary_record, intensity_record, StatRecord};
pub use threshold::{binarize, BinaryOutcome};
