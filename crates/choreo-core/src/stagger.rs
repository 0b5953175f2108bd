/// Per-item sub-progress for a staggered group sharing one window.
///
/// Each item lags the previous by `amount` (before the group is rescaled to
/// fit the window); the last item finishes exactly at `t = 1`.
pub fn stagger(t: f64, index: usize, count: usize, amount: f64) -> f64 {
    if count <= 1 || amount <= 0.0 {
        return t.clamp(0.0, 1.0);
    }
    let total = 1.0 + amount * (count - 1) as f64;
    let offset = amount * index.min(count - 1) as f64;
    (t * total - offset).clamp(0.0, 1.0)
}
