//! The declarative progress-to-property table.
//!
//! Each [`PropertyRule`] owns exactly one (target, property) pair and every
//! window that contributes to it, so there is no last-writer-wins between
//! rows. Segments within a rule are validated to be non-overlapping.

use crate::color::{ColorRamp, Rgb};
use crate::constants::MASK_QUANTUM;
use crate::easing::Easing;
use crate::error::ConfigError;
use crate::window::Window;
use std::fmt;

/// Identifier of a visual target, resolved by the front-end to an element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    TranslateX,
    TranslateY,
    Opacity,
    Scale,
    Color,
    BackgroundColor,
    /// Radius of a circular clip anchored at the element centre.
    ClipCircle,
}

impl Property {
    pub fn css_name(self) -> &'static str {
        match self {
            Property::TranslateX => "--tx",
            Property::TranslateY => "--ty",
            Property::Opacity => "opacity",
            Property::Scale => "--scale",
            Property::Color => "color",
            Property::BackgroundColor => "background-color",
            Property::ClipCircle => "clip-path",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Px(f64),
    Percent(f64),
    Unitless(f64),
    Color(Rgb),
}

impl Value {
    /// CSS text for this value when written to `property`.
    pub fn to_css(&self, property: Property) -> String {
        match (property, self) {
            (Property::ClipCircle, Value::Percent(p)) => format!("circle({p}% at 50% 50%)"),
            (_, Value::Px(v)) => format!("{v}px"),
            (_, Value::Percent(v)) => format!("{v}%"),
            (_, Value::Unitless(v)) => format!("{v}"),
            (_, Value::Color(c)) => c.to_string(),
        }
    }

    fn is_color(&self) -> bool {
        matches!(self, Value::Color(_))
    }
}

/// One contributing window of a rule: `from` at the window start, `to` at its end.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub window: Window,
    pub from: Value,
    pub to: Value,
    pub easing: Easing,
}

impl Segment {
    pub fn linear(window: Window, from: Value, to: Value) -> Self {
        Self {
            window,
            from,
            to,
            easing: Easing::Linear,
        }
    }

    pub fn eased(window: Window, from: Value, to: Value, easing: Easing) -> Self {
        Self {
            window,
            from,
            to,
            easing,
        }
    }

    fn sample(&self, progress: f64) -> Value {
        let t = self.easing.apply(self.window.progress(progress));
        interpolate(self.from, self.to, t)
    }
}

/// Interpolate between two values of the same kind. Mismatched numeric units
/// take the unit of `to`.
pub fn interpolate(from: Value, to: Value, t: f64) -> Value {
    match (from, to) {
        (Value::Color(a), Value::Color(b)) => Value::Color(ColorRamp { from: a, to: b }.at(t)),
        (Value::Percent(a), Value::Percent(b)) => Value::Percent(quantize(lerp(a, b, t))),
        (a, b) => {
            let v = lerp(scalar(a), scalar(b), t);
            match b {
                Value::Px(_) => Value::Px(v),
                Value::Percent(_) => Value::Percent(quantize(v)),
                _ => Value::Unitless(v),
            }
        }
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[inline]
fn quantize(percent: f64) -> f64 {
    (percent * MASK_QUANTUM).round() / MASK_QUANTUM
}

fn scalar(v: Value) -> f64 {
    match v {
        Value::Px(x) | Value::Percent(x) | Value::Unitless(x) => x,
        Value::Color(_) => 0.0,
    }
}

/// Single source of truth for one (target, property) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRule {
    pub name: String,
    pub target: TargetId,
    pub property: Property,
    segments: Vec<Segment>,
}

impl PropertyRule {
    /// Sorts segments by start and rejects empty, overlapping or mixed-kind rules.
    pub fn new(
        name: impl Into<String>,
        target: TargetId,
        property: Property,
        mut segments: Vec<Segment>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if segments.is_empty() {
            return Err(ConfigError::EmptyRule { name });
        }
        segments.sort_by(|a, b| a.window.start().total_cmp(&b.window.start()));
        for pair in segments.windows(2) {
            if pair[0].window.overlaps(&pair[1].window) {
                return Err(ConfigError::OverlappingSegments {
                    name,
                    at: pair[1].window.start(),
                });
            }
        }
        let color = segments[0].from.is_color();
        if segments
            .iter()
            .any(|s| s.from.is_color() != color || s.to.is_color() != color)
        {
            return Err(ConfigError::MixedValueKinds { name });
        }
        Ok(Self {
            name,
            target,
            property,
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Branch order: before the first segment its `from`; inside a segment
    /// its interpolation; in a gap or past the end the preceding `to`.
    pub fn evaluate(&self, progress: f64) -> Value {
        let mut value = self.segments[0].from;
        for segment in &self.segments {
            if progress < segment.window.start() {
                break;
            }
            value = segment.sample(progress);
        }
        value
    }
}
