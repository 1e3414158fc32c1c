use tracing::info;

use crate::config::SelectorConfig;
use crate::display::{compute_square_selection, DisplayRect, DisplayTransform, SelectionRect};
use crate::error::{Result, StainlabError};
use crate::io::crop::extract_crop;
use crate::raster::SourceImage;

/// State of the square selector: the loaded image, the viewport it is fitted
/// into, the square side and the current selection.
pub struct SelectorSession {
    image: Option<(String, SourceImage)>,
    viewport: (u32, u32),
    transform: Option<DisplayTransform>,
    side: u32,
    min_side: u32,
    max_side: u32,
    /// Last click, in source pixels.
    last_click: Option<(i64, i64)>,
    selection: Option<SelectionRect>,
}

impl SelectorSession {
    /// Unvalidated bounds are normalized: swapped when inverted, floored at 1,
    /// with the default side pulled into range.
    pub fn new(config: &SelectorConfig) -> Self {
        let lo = config.min_side.min(config.max_side).max(1);
        let hi = config.min_side.max(config.max_side).max(lo);
        Self {
            image: None,
            viewport: (
                config.initial_viewport[0].max(1),
                config.initial_viewport[1].max(1),
            ),
            transform: None,
            side: config.default_side.clamp(lo, hi),
            min_side: lo,
            max_side: hi,
            last_click: None,
            selection: None,
        }
    }

    /// Install a new image, dropping any previous selection.
    pub fn load(&mut self, name: impl Into<String>, image: SourceImage) {
        let name = name.into();
        let transform = DisplayTransform::for_image(&image, self.viewport.0, self.viewport.1);
        info!(
            "Selector loaded {name} ({}x{}), display {}x{}",
            image.width(),
            image.height(),
            transform.display_width,
            transform.display_height
        );
        self.image = Some((name, image));
        self.transform = Some(transform);
        self.last_click = None;
        self.selection = None;
    }

    /// Refit the image after the viewport changed size. The selection stays
    /// in source coordinates; only its overlay moves.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        let viewport = (width.max(1), height.max(1));
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if let Some((_, ref image)) = self.image {
            self.transform = Some(DisplayTransform::for_image(image, viewport.0, viewport.1));
        }
    }

    /// Select a square centered on a click at display coordinates.
    pub fn click(&mut self, display_x: f64, display_y: f64) -> Result<SelectionRect> {
        let (image, transform) = self.loaded()?;
        let (source_x, source_y) = transform.to_source_coords(display_x, display_y);
        let rect = compute_square_selection(
            source_x,
            source_y,
            self.side,
            image.width(),
            image.height(),
        )?;

        self.last_click = Some((source_x, source_y));
        self.selection = Some(rect);
        Ok(rect)
    }

    /// Change the square side (clamped to the configured range) and
    /// re-select around the last click. Returns the side in effect.
    ///
    /// If the new square does not fit the image the previous side and
    /// selection are kept.
    pub fn set_side(&mut self, side: u32) -> Result<u32> {
        let side = side.clamp(self.min_side, self.max_side);

        if let (Some((x, y)), Some((_, image))) = (self.last_click, self.image.as_ref()) {
            let rect = compute_square_selection(x, y, side, image.width(), image.height())?;
            self.selection = Some(rect);
        }
        self.side = side;
        Ok(side)
    }

    /// Current selection mapped to display coordinates.
    pub fn overlay(&self) -> Option<DisplayRect> {
        let transform = self.transform?;
        self.selection.map(|rect| transform.rect_to_display(&rect))
    }

    /// Full-resolution copy of the selected square.
    pub fn crop(&self) -> Result<SourceImage> {
        let (_, image) = self.image.as_ref().ok_or(StainlabError::NoImageLoaded)?;
        let rect = self.selection.ok_or(StainlabError::NoSelection)?;
        extract_crop(image, &rect)
    }

    fn loaded(&self) -> Result<(&SourceImage, DisplayTransform)> {
        match (&self.image, self.transform) {
            (Some((_, image)), Some(transform)) => Ok((image, transform)),
            _ => Err(StainlabError::NoImageLoaded),
        }
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref().map(|(_, image)| image)
    }

    pub fn image_name(&self) -> Option<&str> {
        self.image.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn transform(&self) -> Option<DisplayTransform> {
        self.transform
    }

    pub fn selection(&self) -> Option<SelectionRect> {
        self.selection
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn side_range(&self) -> (u32, u32) {
        (self.min_side, self.max_side)
    }

    /// Side range that also fits inside the loaded image.
    pub fn fitting_side_range(&self) -> (u32, u32) {
        match self.image() {
            Some(image) => {
                let fit = self.max_side.min(image.width().min(image.height()));
                (self.min_side, fit.max(self.min_side))
            }
            None => self.side_range(),
        }
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}
