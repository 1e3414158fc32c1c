use image::imageops::FilterType;

use crate::error::Result;
use crate::io::image_io::{from_dynamic_image, to_dynamic_image};
use crate::raster::SourceImage;

use super::transform::DisplayTransform;

/// Resample the image to the transform's display size (Lanczos3).
pub fn preview(image: &SourceImage, transform: &DisplayTransform) -> Result<SourceImage> {
    if transform.display_width == image.width() && transform.display_height == image.height() {
        return Ok(image.clone());
    }
    let resized = to_dynamic_image(image)?.resize_exact(
        transform.display_width,
        transform.display_height,
        FilterType::Lanczos3,
    );
    from_dynamic_image(resized)
}
