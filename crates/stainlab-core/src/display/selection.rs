use tracing::debug;

use crate::error::{Result, StainlabError};

/// A square selection in source image pixel coordinates.
///
/// `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl SelectionRect {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether the rectangle lies inside a `width x height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }
}

/// Center a `side x side` square on the click point, shifted so it stays
/// inside the image.
///
/// Squares larger than the image's shorter edge are rejected rather than
/// clipped.
pub fn compute_square_selection(
    click_x: i64,
    click_y: i64,
    side: u32,
    source_width: u32,
    source_height: u32,
) -> Result<SelectionRect> {
    if side == 0 {
        return Err(StainlabError::InvalidDimensions {
            width: side,
            height: side,
        });
    }
    if side > source_width || side > source_height {
        return Err(StainlabError::SizeExceedsImage {
            side,
            width: source_width,
            height: source_height,
        });
    }

    let half = (side / 2) as i64;
    let left = (click_x - half).clamp(0, (source_width - side) as i64) as u32;
    let top = (click_y - half).clamp(0, (source_height - side) as i64) as u32;

    let rect = SelectionRect {
        left,
        top,
        right: left + side,
        bottom: top + side,
    };
    debug!("Square selection at ({click_x},{click_y}), side {side}: {rect:?}");
    Ok(rect)
}
