use ndarray::s;
use tracing::debug;

use crate::display::SelectionRect;
use crate::error::{Result, StainlabError};
use crate::raster::SourceImage;

/// Copy the selected region out of the image at full resolution.
///
/// Fails with `OutOfBounds` when the rectangle does not fit the image, e.g.
/// when it was computed for an image that has since been replaced.
pub fn extract_crop(image: &SourceImage, rect: &SelectionRect) -> Result<SourceImage> {
    if rect.width() == 0 || rect.height() == 0 {
        return Err(StainlabError::InvalidDimensions {
            width: rect.width(),
            height: rect.height(),
        });
    }
    if !rect.fits_within(image.width(), image.height()) {
        return Err(StainlabError::OutOfBounds {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
            width: image.width(),
            height: image.height(),
        });
    }

    let region = image
        .data()
        .slice(s![
            rect.top as usize..rect.bottom as usize,
            rect.left as usize..rect.right as usize,
            ..
        ])
        .to_owned();
    debug!("Cropped {}x{} region at ({},{})", rect.width(), rect.height(), rect.left, rect.top);
    SourceImage::new(region)
}
