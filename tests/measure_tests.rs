// Host-side tests for the pure measurement helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod measure {
    include!("../src/measure.rs");
}

use measure::*;

#[test]
fn pinned_progress_tracks_section_scroll() {
    // 3000px section in a 1000px viewport scrolls 2000px while pinned
    assert_eq!(pinned_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(pinned_progress(-500.0, 3000.0, 1000.0), 0.25);
    assert_eq!(pinned_progress(-1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(pinned_progress(-2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn pinned_progress_clamps_outside_the_section() {
    assert_eq!(pinned_progress(400.0, 3000.0, 1000.0), 0.0);
    assert_eq!(pinned_progress(-5000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn pinned_progress_handles_sections_shorter_than_viewport() {
    assert_eq!(pinned_progress(10.0, 800.0, 1000.0), 0.0);
    assert_eq!(pinned_progress(-10.0, 800.0, 1000.0), 1.0);
    assert_eq!(pinned_progress(0.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn bounds_parse_from_flat_array() {
    let b = bounds_from_array(&[-1.0, -2.0, -3.0, 1.0, 2.0, 3.0]).unwrap();
    assert_eq!(b.size(), glam::Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(b.center(), glam::Vec3::ZERO);
}

#[test]
fn malformed_bounds_are_rejected() {
    assert!(bounds_from_array(&[]).is_none());
    assert!(bounds_from_array(&[0.0, 0.0, 0.0, 1.0, 1.0]).is_none());
    assert!(bounds_from_array(&[0.0, 0.0, 0.0, 1.0, 1.0, f64::NAN]).is_none());
}

#[test]
fn char_style_endpoints() {
    assert_eq!(
        char_style(0.0),
        ("0".to_string(), "translateY(100%)".to_string())
    );
    assert_eq!(char_style(1.0), ("1".to_string(), "translateY(0%)".to_string()));
    assert_eq!(char_style(0.5).1, "translateY(50%)");
}
