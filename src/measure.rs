// Pure conversions between DOM/JS measurements and choreography inputs.
// Kept free of `web_sys` so the host tests can include this file directly.

use crate::constants::CHAR_RISE_PERCENT;
use choreo_core::BoundingBox;
use glam::Vec3;

/// Progress through a pinned section from its bounding rect.
///
/// 0 when the section top reaches the viewport top, 1 when its bottom
/// reaches the viewport bottom.
pub fn pinned_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let distance = height - viewport_height;
    if !distance.is_finite() || distance <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    (-top / distance).clamp(0.0, 1.0)
}

/// `[minX, minY, minZ, maxX, maxY, maxZ]` as resolved by the viewer's load promise.
pub fn bounds_from_array(values: &[f64]) -> Option<BoundingBox> {
    if values.len() != 6 || values.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let v = |i: usize| values[i] as f32;
    Some(BoundingBox::new(
        Vec3::new(v(0), v(1), v(2)),
        Vec3::new(v(3), v(4), v(5)),
    ))
}

/// Inline `opacity` and `transform` for a split character at sub-progress `t`.
pub fn char_style(t: f64) -> (String, String) {
    let t = t.clamp(0.0, 1.0);
    let rise = (1.0 - t) * CHAR_RISE_PERCENT;
    (format!("{t}"), format!("translateY({rise}%)"))
}
