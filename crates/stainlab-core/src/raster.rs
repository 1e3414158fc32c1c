use ndarray::{Array2, Array3, Axis};

use crate::error::{Result, StainlabError};

/// A decoded raster image, 8 bits per sample.
///
/// Always has non-zero dimensions and 1 (gray), 3 (RGB) or 4 (RGBA)
/// interleaved channels. Images decoded from 16-bit files also carry their
/// grayscale reduction at full depth for intensity measurements.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    /// Pixel data, row-major, shape = (height, width, channels)
    data: Array3<u8>,
    native_gray: Option<Array2<u16>>,
}

impl SourceImage {
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (h, w, channels) = data.dim();
        if !matches!(channels, 1 | 3 | 4) {
            return Err(StainlabError::UnsupportedChannelLayout { channels });
        }
        if h == 0 || w == 0 {
            return Err(StainlabError::InvalidDimensions {
                width: w as u32,
                height: h as u32,
            });
        }
        Ok(Self {
            data,
            native_gray: None,
        })
    }

    /// Build from an interleaved sample buffer (`width * height * channels` bytes).
    pub fn from_raw(width: u32, height: u32, channels: usize, pixels: Vec<u8>) -> Result<Self> {
        let data = Array3::from_shape_vec((height as usize, width as usize, channels), pixels)
            .map_err(|_| StainlabError::InvalidDimensions { width, height })?;
        Self::new(data)
    }

    /// Wrap a single-channel buffer.
    pub fn from_gray(gray: Array2<u8>) -> Result<Self> {
        Self::new(gray.insert_axis(Axis(2)))
    }

    /// Attach the full-depth grayscale plane of a 16-bit source. Its shape
    /// must be `(height, width)`.
    pub fn with_native_gray(mut self, gray: Array2<u16>) -> Result<Self> {
        let (h, w) = gray.dim();
        if (h as u32, w as u32) != (self.height(), self.width()) {
            return Err(StainlabError::InvalidDimensions {
                width: w as u32,
                height: h as u32,
            });
        }
        self.native_gray = Some(gray);
        Ok(self)
    }

    /// Grayscale samples on the 0-65535 scale, present for 16-bit sources only.
    pub fn native_gray(&self) -> Option<&Array2<u16>> {
        self.native_gray.as_ref()
    }

    /// Bits per sample of the decoded file (8 or 16).
    pub fn bit_depth(&self) -> u32 {
        if self.native_gray.is_some() {
            16
        } else {
            8
        }
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn channel_depth(&self) -> usize {
        self.data.dim().2
    }

    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    /// Interleaved samples in row-major order.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }
}
