use crate::error::ConfigError;

/// A named slice `[start, end]` of the pinned scroll range.
///
/// Construction rejects degenerate windows so that [`Window::progress`]
/// never divides by zero at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    start: f64,
    end: f64,
}

impl Window {
    pub fn new(name: &str, start: f64, end: f64) -> Result<Self, ConfigError> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 || end > 1.0 {
            return Err(ConfigError::WindowOutOfRange {
                name: name.to_owned(),
                start,
                end,
            });
        }
        if start >= end {
            return Err(ConfigError::DegenerateWindow {
                name: name.to_owned(),
                start,
                end,
            });
        }
        Ok(Self { start, end })
    }

    /// Build from a `(start, end)` pair, as stored in the constants tables.
    pub fn from_pair(name: &str, (start, end): (f64, f64)) -> Result<Self, ConfigError> {
        Self::new(name, start, end)
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Window-local sub-progress: 0 before `start`, 1 after `end`, linear between.
    #[inline]
    pub fn progress(&self, progress: f64) -> f64 {
        ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn contains(&self, progress: f64) -> bool {
        progress >= self.start && progress <= self.end
    }

    /// Half-open overlap test; windows that only touch at an endpoint do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Window) -> bool {
        self.start < other.end && other.start < self.end
    }
}
