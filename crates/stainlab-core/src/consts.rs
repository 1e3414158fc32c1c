/// Default binarization threshold. Values at or above it count as positive.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Value written for pixels below the threshold.
pub const BINARY_LOW: u8 = 0;

/// Value written for pixels at or above the threshold.
pub const BINARY_HIGH: u8 = 255;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;

/// Number of image slots in the analyzer tools.
pub const DEFAULT_SLOT_COUNT: usize = 3;

/// Edge length of the square box analyzer thumbnails are fitted into.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 200;

/// Default square crop side length (pixels).
pub const DEFAULT_SQUARE_SIDE: u32 = 200;

/// Smallest square side the selector offers.
pub const MIN_SQUARE_SIDE: u32 = 20;

/// Largest square side the selector offers.
pub const MAX_SQUARE_SIDE: u32 = 2000;

/// Selector viewport size before the first resize notification.
pub const DEFAULT_VIEWPORT: [u32; 2] = [800, 600];

/// File extensions accepted by the open dialogs and drag-and-drop.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Spreadsheet column headers.
pub const COLUMN_IMAGE_NAME: &str = "Image Name";
pub const COLUMN_TOTAL_PIXELS: &str = "Total Pixels";
pub const COLUMN_POSITIVE_PERCENT: &str = "Positive Pixels (%)";
pub const COLUMN_NEGATIVE_PERCENT: &str = "Negative Pixels (%)";
pub const COLUMN_AVERAGE_INTENSITY: &str = "Average Intensity";
