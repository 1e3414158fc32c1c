use std::path::Path;

use image::{ColorType, DynamicImage, GrayImage, ImageError, ImageFormat, RgbImage, RgbaImage};
use ndarray::{Array2, Array3};
use tracing::{info, warn};

use crate::consts::SUPPORTED_EXTENSIONS;
use crate::error::{Result, StainlabError};
use crate::raster::SourceImage;
use crate::stats::reduce_channels16;

/// Whether the path carries one of the supported image extensions
/// (case-insensitive).
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}

/// Reject dropped paths that are not regular files or not supported images,
/// before any decoding is attempted.
pub fn check_image_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        warn!("Rejected {}: not a file", path.display());
        return Err(StainlabError::UnreadableFile {
            path: path.to_path_buf(),
            reason: "not a regular file".into(),
        });
    }
    if !is_supported_extension(path) {
        warn!("Rejected {}: unsupported extension", path.display());
        return Err(StainlabError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Load an image file as 8-bit gray, RGB or RGBA.
///
/// Gray+alpha input is expanded to RGBA; 16-bit and float input is reduced
/// to 8 bits per sample. 16-bit input also keeps a full-depth grayscale
/// plane (see [`SourceImage::native_gray`]).
pub fn load_source_image(path: &Path) -> Result<SourceImage> {
    let unreadable = |reason: String| StainlabError::UnreadableFile {
        path: path.to_path_buf(),
        reason,
    };

    let reader = image::ImageReader::open(path)
        .map_err(|e| unreadable(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| unreadable(e.to_string()))?;

    let decoded = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) | ImageError::Decoding(_) => StainlabError::UnsupportedFormat {
            path: path.to_path_buf(),
        },
        other => unreadable(other.to_string()),
    })?;

    let image = from_dynamic_image(decoded)?;
    info!(
        "Loaded {} ({}x{}, {} channel(s), {}-bit)",
        path.display(),
        image.width(),
        image.height(),
        image.channel_depth(),
        image.bit_depth()
    );
    Ok(image)
}

/// Convert a decoded image into a `SourceImage`.
pub fn from_dynamic_image(img: DynamicImage) -> Result<SourceImage> {
    let (w, h) = (img.width(), img.height());
    let image = match img.color() {
        ColorType::L8 | ColorType::L16 => SourceImage::from_raw(w, h, 1, img.to_luma8().into_raw()),
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => {
            SourceImage::from_raw(w, h, 3, img.to_rgb8().into_raw())
        }
        _ => SourceImage::from_raw(w, h, 4, img.to_rgba8().into_raw()),
    }?;

    match img.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => {
            image.with_native_gray(native_gray16(&img)?)
        }
        _ => Ok(image),
    }
}

/// BT.601 grayscale of a 16-bit image without reducing the sample depth.
fn native_gray16(img: &DynamicImage) -> Result<Array2<u16>> {
    let (w, h) = (img.width(), img.height());
    let (channels, raw) = match img.color() {
        ColorType::L16 | ColorType::La16 => (1, img.to_luma16().into_raw()),
        _ => (3, img.to_rgb16().into_raw()),
    };
    let data = Array3::from_shape_vec((h as usize, w as usize, channels), raw)
        .map_err(|_| StainlabError::InvalidDimensions {
            width: w,
            height: h,
        })?;
    reduce_channels16(data.view())
}

/// Convert a `SourceImage` into an `image` crate buffer.
pub fn to_dynamic_image(image: &SourceImage) -> Result<DynamicImage> {
    let (w, h) = (image.width(), image.height());
    let raw = image.to_raw();
    let dynamic = match image.channel_depth() {
        1 => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
        channels => return Err(StainlabError::UnsupportedChannelLayout { channels }),
    };
    dynamic.ok_or(StainlabError::InvalidDimensions {
        width: w,
        height: h,
    })
}

/// Output format chosen from the file extension. Unknown extensions fall
/// back to PNG.
pub fn output_format(path: &Path) -> ImageFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("tif" | "tiff") => ImageFormat::Tiff,
        Some("bmp") => ImageFormat::Bmp,
        _ => ImageFormat::Png,
    }
}

/// Save an image, choosing format from the file extension.
pub fn save_source_image(image: &SourceImage, path: &Path) -> Result<()> {
    let format = output_format(path);
    let mut dynamic = to_dynamic_image(image)?;

    // JPEG has no alpha channel
    if format == ImageFormat::Jpeg && image.channel_depth() == 4 {
        dynamic = DynamicImage::ImageRgb8(dynamic.to_rgb8());
    }

    dynamic
        .save_with_format(path, format)
        .map_err(|e| StainlabError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    info!(
        "Saved {}x{} image to {} ({:?})",
        image.width(),
        image.height(),
        path.display(),
        format
    );
    Ok(())
}

/// Save a single-channel buffer (grayscale or binarized), choosing format
/// from the file extension.
pub fn save_gray(gray: &Array2<u8>, path: &Path) -> Result<()> {
    let image = SourceImage::from_gray(gray.clone())?;
    save_source_image(&image, path)
}
