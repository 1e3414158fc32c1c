use tracing::debug;

use crate::error::{Result, StainlabError};
use crate::raster::SourceImage;

use super::selection::SelectionRect;

/// Uniform fit-to-viewport scaling of a source image.
///
/// The image is drawn at the viewport's top-left corner, so `offset` is
/// always `(0.0, 0.0)` for transforms produced by [`compute_fit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayTransform {
    pub scale: f64,
    pub offset: (f64, f64),
    pub display_width: u32,
    pub display_height: u32,
}

/// A selection rectangle in display coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl DisplayRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Fit a `source_width x source_height` image into the viewport, preserving
/// aspect ratio. Viewport dimensions are clamped to at least 1.
pub fn compute_fit(
    source_width: u32,
    source_height: u32,
    viewport_width: u32,
    viewport_height: u32,
) -> Result<DisplayTransform> {
    if source_width == 0 || source_height == 0 {
        return Err(StainlabError::InvalidDimensions {
            width: source_width,
            height: source_height,
        });
    }
    Ok(fit(source_width, source_height, viewport_width, viewport_height))
}

fn fit(source_width: u32, source_height: u32, viewport_width: u32, viewport_height: u32) -> DisplayTransform {
    let vw = viewport_width.max(1);
    let vh = viewport_height.max(1);
    let scale = (vw as f64 / source_width as f64).min(vh as f64 / source_height as f64);

    let transform = DisplayTransform {
        scale,
        offset: (0.0, 0.0),
        display_width: fit_axis(source_width, scale, vw),
        display_height: fit_axis(source_height, scale, vh),
    };
    debug!(
        "Fit {}x{} into {}x{}: scale {:.4}, display {}x{}",
        source_width,
        source_height,
        vw,
        vh,
        scale,
        transform.display_width,
        transform.display_height
    );
    transform
}

fn fit_axis(source: u32, scale: f64, viewport: u32) -> u32 {
    ((source as f64 * scale).round() as u32).clamp(1, viewport)
}

impl DisplayTransform {
    /// Fit an already-validated image into the viewport.
    pub fn for_image(image: &SourceImage, viewport_width: u32, viewport_height: u32) -> Self {
        fit(image.width(), image.height(), viewport_width, viewport_height)
    }

    /// Map a display (pointer) position to the nearest source pixel.
    ///
    /// The result may lie outside the image when the pointer is outside the
    /// drawn area.
    pub fn to_source_coords(&self, display_x: f64, display_y: f64) -> (i64, i64) {
        (
            ((display_x - self.offset.0) / self.scale).round() as i64,
            ((display_y - self.offset.1) / self.scale).round() as i64,
        )
    }

    /// Map a source position to display coordinates.
    pub fn to_display_coords(&self, source_x: f64, source_y: f64) -> (f64, f64) {
        (
            source_x * self.scale + self.offset.0,
            source_y * self.scale + self.offset.1,
        )
    }

    /// Map a selection to display coordinates for drawing the overlay.
    pub fn rect_to_display(&self, rect: &SelectionRect) -> DisplayRect {
        let (left, top) = self.to_display_coords(rect.left as f64, rect.top as f64);
        let (right, bottom) = self.to_display_coords(rect.right as f64, rect.bottom as f64);
        DisplayRect {
            left,
            top,
            right,
            bottom,
        }
    }
}
