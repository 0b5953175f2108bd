use thiserror::Error;

/// Problems found while validating a [`crate::ChoreoConfig`].
///
/// Each error is scoped to one rule so the choreographer can drop that rule
/// and keep evaluating the rest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("window `{name}` is degenerate: start {start} must be below end {end}")]
    DegenerateWindow { name: String, start: f64, end: f64 },
    #[error("window `{name}` lies outside [0, 1]: [{start}, {end}]")]
    WindowOutOfRange { name: String, start: f64, end: f64 },
    #[error("rule `{name}` has overlapping segments at {at}")]
    OverlappingSegments { name: String, at: f64 },
    #[error("rule `{name}` has no segments")]
    EmptyRule { name: String },
    #[error("rule `{name}` mixes color and numeric values")]
    MixedValueKinds { name: String },
    #[error("tooltip `{name}` hides before it is fully shown")]
    TooltipHideOverlapsShow { name: String },
    #[error("unknown easing `{0}`")]
    UnknownEasing(String),
    #[error("device breakpoint must be positive, got {0}")]
    InvalidBreakpoint(f64),
}
