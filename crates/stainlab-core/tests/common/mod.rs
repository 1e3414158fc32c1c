use ndarray::{Array2, Array3};

use stainlab_core::raster::SourceImage;

/// Grayscale source image filled with a single value.
pub fn uniform_gray(width: u32, height: u32, value: u8) -> SourceImage {
    SourceImage::from_gray(Array2::from_elem((height as usize, width as usize), value))
        .expect("valid gray image")
}

/// Grayscale source image whose pixel at (row, col) is `(row * 16 + col) % 256`.
pub fn pattern_gray(width: u32, height: u32) -> SourceImage {
    let data = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        ((row * 16 + col) % 256) as u8
    });
    SourceImage::from_gray(data).expect("valid gray image")
}

/// RGB source image filled with one color.
pub fn uniform_rgb(width: u32, height: u32, rgb: [u8; 3]) -> SourceImage {
    let data = Array3::from_shape_fn((height as usize, width as usize, 3), |(_, _, c)| rgb[c]);
    SourceImage::new(data).expect("valid rgb image")
}

/// RGBA source image whose channels encode the pixel position.
pub fn pattern_rgba(width: u32, height: u32) -> SourceImage {
    let data = Array3::from_shape_fn((height as usize, width as usize, 4), |(row, col, c)| {
        match c {
            0 => row as u8,
            1 => col as u8,
            2 => (row + col) as u8,
            _ => 255,
        }
    });
    SourceImage::new(data).expect("valid rgba image")
}
