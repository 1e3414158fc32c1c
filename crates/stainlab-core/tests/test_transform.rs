use approx::assert_relative_eq;

use stainlab_core::display::{compute_fit, DisplayTransform, SelectionRect};
use stainlab_core::error::StainlabError;

mod common;

// ---------------------------------------------------------------------------
// compute_fit
// ---------------------------------------------------------------------------

#[test]
fn test_fit_landscape_into_800x600() {
    let t = compute_fit(1000, 500, 800, 600).unwrap();
    assert_relative_eq!(t.scale, 0.8, epsilon = 1e-9);
    assert_eq!(t.display_width, 800);
    assert_eq!(t.display_height, 400);
    assert_eq!(t.offset, (0.0, 0.0));
}

#[test]
fn test_fit_enlarges_small_image() {
    let t = compute_fit(100, 50, 800, 600).unwrap();
    assert_relative_eq!(t.scale, 8.0, epsilon = 1e-9);
    assert_eq!(t.display_width, 800);
    assert_eq!(t.display_height, 400);
}

#[test]
fn test_fit_portrait_limited_by_height() {
    let t = compute_fit(300, 900, 800, 600).unwrap();
    assert_relative_eq!(t.scale, 600.0 / 900.0, epsilon = 1e-9);
    assert_eq!(t.display_width, 200);
    assert_eq!(t.display_height, 600);
}

#[test]
fn test_fit_zero_viewport_is_clamped() {
    let t = compute_fit(640, 480, 0, 0).unwrap();
    assert_eq!(t.display_width, 1);
    assert_eq!(t.display_height, 1);
    assert!(t.scale > 0.0);
}

#[test]
fn test_fit_rejects_empty_source() {
    assert!(matches!(
        compute_fit(0, 480, 800, 600),
        Err(StainlabError::InvalidDimensions { width: 0, height: 480 })
    ));
    assert!(compute_fit(640, 0, 800, 600).is_err());
}

#[test]
fn test_fit_stays_within_viewport_and_keeps_aspect() {
    let sizes = [1u32, 7, 20, 333, 500, 1000, 1920, 4001];
    let viewports = [1u32, 13, 200, 599, 800, 1280];

    for &sw in &sizes {
        for &sh in &sizes {
            for &vw in &viewports {
                for &vh in &viewports {
                    let t = compute_fit(sw, sh, vw, vh).unwrap();
                    assert!(t.display_width >= 1 && t.display_height >= 1);
                    assert!(t.display_width <= vw, "{sw}x{sh} in {vw}x{vh}: {t:?}");
                    assert!(t.display_height <= vh, "{sw}x{sh} in {vw}x{vh}: {t:?}");

                    // Each axis is the exact scaled size rounded, unless it
                    // had to be raised to the one-pixel minimum.
                    let exact_w = sw as f64 * t.scale;
                    let exact_h = sh as f64 * t.scale;
                    if exact_w >= 0.5 {
                        assert!((t.display_width as f64 - exact_w).abs() <= 0.5 + 1e-9);
                    }
                    if exact_h >= 0.5 {
                        assert!((t.display_height as f64 - exact_h).abs() <= 0.5 + 1e-9);
                    }
                }
            }
        }
    }
}

#[test]
fn test_fit_touches_viewport_on_one_axis() {
    let t = compute_fit(1234, 567, 800, 600).unwrap();
    assert!(t.display_width == 800 || t.display_height == 600);
}

#[test]
fn test_for_image_matches_compute_fit() {
    let img = common::uniform_gray(1000, 500, 0);
    let t = DisplayTransform::for_image(&img, 800, 600);
    assert_eq!(t, compute_fit(1000, 500, 800, 600).unwrap());
}

// ---------------------------------------------------------------------------
// Coordinate mapping
// ---------------------------------------------------------------------------

#[test]
fn test_click_maps_to_source() {
    let t = compute_fit(1000, 500, 800, 600).unwrap();
    assert_eq!(t.to_source_coords(400.0, 200.0), (500, 250));
    assert_eq!(t.to_source_coords(0.0, 0.0), (0, 0));
}

#[test]
fn test_to_source_rounds_to_nearest() {
    let t = compute_fit(1000, 500, 800, 600).unwrap();
    // 1.0 / 0.8 = 1.25 -> 1, 1.4 / 0.8 = 1.75 -> 2
    assert_eq!(t.to_source_coords(1.0, 1.4), (1, 2));
}

#[test]
fn test_to_source_outside_image_is_not_clamped() {
    let t = compute_fit(1000, 500, 800, 600).unwrap();
    let (x, y) = t.to_source_coords(-8.0, 560.0);
    assert_eq!(x, -10);
    assert_eq!(y, 700);
}

#[test]
fn test_to_display_forward_mapping() {
    let t = compute_fit(1000, 500, 800, 600).unwrap();
    let (x, y) = t.to_display_coords(500.0, 250.0);
    assert_relative_eq!(x, 400.0, epsilon = 1e-9);
    assert_relative_eq!(y, 200.0, epsilon = 1e-9);
}

#[test]
fn test_round_trip_within_one_pixel() {
    let cases = [(1000u32, 500u32, 800u32, 600u32), (37, 91, 640, 480), (4000, 3000, 333, 250)];
    for (sw, sh, vw, vh) in cases {
        let t = compute_fit(sw, sh, vw, vh).unwrap();
        for x in (0..sw).step_by((sw as usize / 17).max(1)) {
            for y in (0..sh).step_by((sh as usize / 13).max(1)) {
                let (dx, dy) = t.to_display_coords(x as f64, y as f64);
                let (rx, ry) = t.to_source_coords(dx, dy);
                assert!((rx - x as i64).abs() <= 1, "x {x} -> {rx}");
                assert!((ry - y as i64).abs() <= 1, "y {y} -> {ry}");
            }
        }
    }
}

#[test]
fn test_rect_to_display() {
    let t = compute_fit(1000, 500, 800, 600).unwrap();
    let rect = SelectionRect {
        left: 425,
        top: 175,
        right: 575,
        bottom: 325,
    };
    let d = t.rect_to_display(&rect);
    assert_relative_eq!(d.left, 340.0, epsilon = 1e-9);
    assert_relative_eq!(d.top, 140.0, epsilon = 1e-9);
    assert_relative_eq!(d.right, 460.0, epsilon = 1e-9);
    assert_relative_eq!(d.bottom, 260.0, epsilon = 1e-9);
    assert_relative_eq!(d.width(), 120.0, epsilon = 1e-9);
    assert_relative_eq!(d.height(), 120.0, epsilon = 1e-9);
}
