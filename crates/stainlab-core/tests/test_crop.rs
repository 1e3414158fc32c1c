use ndarray::{s, Array3};

use stainlab_core::display::{compute_square_selection, SelectionRect};
use stainlab_core::error::StainlabError;
use stainlab_core::io::crop::extract_crop;
use stainlab_core::raster::SourceImage;

mod common;

#[test]
fn test_crop_gray_center() {
    let img = common::pattern_gray(4, 4);
    let rect = SelectionRect {
        left: 1,
        top: 1,
        right: 3,
        bottom: 3,
    };

    let cropped = extract_crop(&img, &rect).unwrap();
    assert_eq!(cropped.width(), 2);
    assert_eq!(cropped.height(), 2);
    assert_eq!(cropped.channel_depth(), 1);
    // Row 1, cols 1..3 => 17, 18; row 2 => 33, 34
    assert_eq!(cropped.to_raw(), vec![17, 18, 33, 34]);
}

#[test]
fn test_crop_preserves_channels() {
    let img = common::pattern_rgba(10, 8);
    let rect = compute_square_selection(5, 4, 4, 10, 8).unwrap();

    let cropped = extract_crop(&img, &rect).unwrap();
    assert_eq!(cropped.channel_depth(), 4);
    assert_eq!((cropped.width(), cropped.height()), (4, 4));

    let expected = img
        .data()
        .slice(s![
            rect.top as usize..rect.bottom as usize,
            rect.left as usize..rect.right as usize,
            ..
        ])
        .to_owned();
    assert_eq!(cropped.data(), &expected);
    // Top-left of the crop carries its source position
    assert_eq!(cropped.data()[[0, 0, 0]], rect.top as u8);
    assert_eq!(cropped.data()[[0, 0, 1]], rect.left as u8);
}

#[test]
fn test_crop_full_image() {
    let img = common::pattern_gray(6, 6);
    let rect = compute_square_selection(3, 3, 6, 6, 6).unwrap();
    let cropped = extract_crop(&img, &rect).unwrap();
    assert_eq!(cropped, img);
}

#[test]
fn test_crop_after_replacement_with_smaller_image() {
    let original = common::uniform_gray(1000, 500, 10);
    let rect = compute_square_selection(500, 250, 150, 1000, 500).unwrap();
    assert!(extract_crop(&original, &rect).is_ok());

    let replacement = common::uniform_gray(400, 300, 10);
    let err = extract_crop(&replacement, &rect).unwrap_err();
    assert!(matches!(
        err,
        StainlabError::OutOfBounds {
            right: 575,
            bottom: 325,
            width: 400,
            height: 300,
            ..
        }
    ));
}

#[test]
fn test_crop_partially_out_of_bounds_rejected() {
    let img = common::uniform_gray(4, 4, 0);
    let rect = SelectionRect {
        left: 3,
        top: 3,
        right: 5,
        bottom: 5,
    };
    assert!(matches!(
        extract_crop(&img, &rect),
        Err(StainlabError::OutOfBounds { .. })
    ));
}

#[test]
fn test_crop_empty_rect_rejected() {
    let img = common::uniform_gray(4, 4, 0);
    let rect = SelectionRect {
        left: 2,
        top: 2,
        right: 2,
        bottom: 3,
    };
    assert!(matches!(
        extract_crop(&img, &rect),
        Err(StainlabError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_crop_rgb_values() {
    let data = Array3::from_shape_fn((3, 3, 3), |(row, col, c)| (row * 30 + col * 3 + c) as u8);
    let img = SourceImage::new(data).unwrap();
    let rect = SelectionRect {
        left: 2,
        top: 2,
        right: 3,
        bottom: 3,
    };
    let cropped = extract_crop(&img, &rect).unwrap();
    assert_eq!(cropped.to_raw(), vec![66, 67, 68]);
}
