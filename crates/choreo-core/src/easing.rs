use crate::error::ConfigError;
use std::str::FromStr;

/// Easing curves applied to a window's sub-progress.
///
/// Names follow the `family.direction` convention used by the page's
/// animation library (`power2.out`, `sine.inOut`, ...). `power0` is linear.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    PowerIn(i32),
    PowerOut(i32),
    PowerInOut(i32),
    SineInOut,
}

impl Easing {
    /// Map `t` in [0, 1] through the curve. Endpoints are preserved exactly.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Easing::Linear => t,
            Easing::PowerIn(n) => t.powi(n + 1),
            Easing::PowerOut(n) => 1.0 - (1.0 - t).powi(n + 1),
            Easing::PowerInOut(n) => {
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(n + 1)
                } else {
                    1.0 - 0.5 * (2.0 * (1.0 - t)).powi(n + 1)
                }
            }
            Easing::SineInOut => -0.5 * ((std::f64::consts::PI * t).cos() - 1.0),
        }
    }
}

impl FromStr for Easing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigError::UnknownEasing(s.to_owned());
        let (family, direction) = s.split_once('.').unwrap_or((s, "out"));
        if family == "linear" || family == "none" || family == "power0" {
            return Ok(Easing::Linear);
        }
        if family == "sine" {
            return match direction {
                "inOut" => Ok(Easing::SineInOut),
                _ => Err(unknown()),
            };
        }
        let power = family
            .strip_prefix("power")
            .and_then(|n| n.parse::<i32>().ok())
            .filter(|n| (1..=4).contains(n))
            .ok_or_else(unknown)?;
        match direction {
            "in" => Ok(Easing::PowerIn(power)),
            "out" => Ok(Easing::PowerOut(power)),
            "inOut" => Ok(Easing::PowerInOut(power)),
            _ => Err(unknown()),
        }
    }
}
