use ndarray::{Array2, ArrayView3, Axis};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{Result, StainlabError};
use crate::raster::SourceImage;

/// Reduce an image to a single 8-bit grayscale channel.
pub fn to_grayscale(image: &SourceImage) -> Result<Array2<u8>> {
    reduce_channels(image.data().view())
}

/// Grayscale at the source's own bit depth: 16-bit files keep their
/// 0-65535 samples, 8-bit files are widened unchanged.
pub fn to_intensity_gray(image: &SourceImage) -> Result<Array2<u16>> {
    match image.native_gray() {
        Some(gray) => Ok(gray.clone()),
        None => Ok(to_grayscale(image)?.mapv(u16::from)),
    }
}

/// Reduce an interleaved `(height, width, channels)` buffer to grayscale.
///
/// Gray input is copied, RGB uses BT.601 luminance, RGBA uses the same
/// weights and ignores alpha.
pub fn reduce_channels(data: ArrayView3<u8>) -> Result<Array2<u8>> {
    reduce(data, |y| y.round().clamp(0.0, u8::MAX as f64) as u8)
}

/// 16-bit counterpart of [`reduce_channels`].
pub fn reduce_channels16(data: ArrayView3<u16>) -> Result<Array2<u16>> {
    reduce(data, |y| y.round().clamp(0.0, u16::MAX as f64) as u16)
}

fn reduce<T>(data: ArrayView3<T>, quantize: impl Fn(f64) -> T) -> Result<Array2<T>>
where
    T: Copy + Into<f64>,
{
    let (h, w, channels) = data.dim();
    match channels {
        1 => Ok(data.index_axis(Axis(2), 0).to_owned()),
        3 | 4 => Ok(Array2::from_shape_fn((h, w), |(row, col)| {
            let sample = |c: usize| -> f64 { data[[row, col, c]].into() };
            quantize(LUMINANCE_R * sample(0) + LUMINANCE_G * sample(1) + LUMINANCE_B * sample(2))
        })),
        channels => Err(StainlabError::UnsupportedChannelLayout { channels }),
    }
}
