use stainlab_core::display::{compute_fit, compute_square_selection, SelectionRect};
use stainlab_core::error::StainlabError;

fn assert_square_inside(rect: &SelectionRect, side: u32, width: u32, height: u32) {
    assert_eq!(rect.width(), side, "{rect:?}");
    assert_eq!(rect.height(), side, "{rect:?}");
    assert!(rect.fits_within(width, height), "{rect:?} in {width}x{height}");
}

#[test]
fn test_click_scenario_800x600_viewport() {
    let t = compute_fit(1000, 500, 800, 600).unwrap();
    let (sx, sy) = t.to_source_coords(400.0, 200.0);
    assert_eq!((sx, sy), (500, 250));

    let rect = compute_square_selection(sx, sy, 150, 1000, 500).unwrap();
    assert_eq!(
        rect,
        SelectionRect {
            left: 425,
            top: 175,
            right: 575,
            bottom: 325
        }
    );
}

#[test]
fn test_odd_side_uses_floor_half() {
    // half = 3 for side 7
    let rect = compute_square_selection(10, 10, 7, 100, 100).unwrap();
    assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (7, 7, 14, 14));
}

#[test]
fn test_clamped_at_top_left_corner() {
    let rect = compute_square_selection(5, 3, 150, 1000, 500).unwrap();
    assert_eq!((rect.left, rect.top), (0, 0));
    assert_square_inside(&rect, 150, 1000, 500);
}

#[test]
fn test_clamped_at_bottom_right_corner() {
    let rect = compute_square_selection(995, 499, 150, 1000, 500).unwrap();
    assert_eq!((rect.right, rect.bottom), (1000, 500));
    assert_square_inside(&rect, 150, 1000, 500);
}

#[test]
fn test_click_outside_image_is_clamped() {
    let rect = compute_square_selection(-300, 9000, 20, 640, 480).unwrap();
    assert_eq!((rect.left, rect.bottom), (0, 480));
    assert_square_inside(&rect, 20, 640, 480);
}

#[test]
fn test_always_square_for_fitting_sides() {
    let dims = [(1000u32, 500u32), (640, 480), (151, 900), (20, 20)];
    let clicks = [(0i64, 0i64), (-50, -50), (75, 75), (10_000, 10_000), (320, 10)];

    for (w, h) in dims {
        let min = w.min(h);
        for side in [1u32, 20, 150, min] {
            if side > min {
                continue;
            }
            for (cx, cy) in clicks {
                let rect = compute_square_selection(cx, cy, side, w, h).unwrap();
                assert_square_inside(&rect, side, w, h);
            }
        }
    }
}

#[test]
fn test_side_equal_to_short_edge_spans_it() {
    let rect = compute_square_selection(700, 250, 500, 1000, 500).unwrap();
    assert_eq!((rect.top, rect.bottom), (0, 500));
    assert_eq!((rect.left, rect.right), (450, 950));
}

#[test]
fn test_side_larger_than_image_rejected() {
    let err = compute_square_selection(50, 50, 501, 1000, 500).unwrap_err();
    assert!(matches!(
        err,
        StainlabError::SizeExceedsImage {
            side: 501,
            width: 1000,
            height: 500
        }
    ));

    assert!(matches!(
        compute_square_selection(0, 0, 2000, 640, 480),
        Err(StainlabError::SizeExceedsImage { .. })
    ));
}

#[test]
fn test_zero_side_rejected() {
    assert!(matches!(
        compute_square_selection(10, 10, 0, 100, 100),
        Err(StainlabError::InvalidDimensions { .. })
    ));
}
