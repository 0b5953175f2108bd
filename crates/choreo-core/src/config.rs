//! Static choreography configuration.
//!
//! Rules are built through [`ConfigBuilder`], which collects every
//! [`ConfigError`] instead of stopping at the first. A rule that fails
//! validation is dropped on its own; the rest of the page still animates.

use crate::color::Rgb;
use crate::constants::*;
use crate::device::DeviceProfiles;
use crate::easing::Easing;
use crate::error::ConfigError;
use crate::model::EntranceConfig;
use crate::rotation::RotationConfig;
use crate::table::{Property, PropertyRule, Segment, TargetId, Value};
use crate::timeline::{ScrubTimeline, TooltipRule, Track};
use crate::window::Window;

/// Per-character reveal of a split headline across one window.
#[derive(Clone, Debug, PartialEq)]
pub struct CharReveal {
    pub target: TargetId,
    pub window: Window,
    pub stagger: f64,
    pub easing: Easing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChoreoConfig {
    pub profiles: DeviceProfiles,
    /// `None` when the entrance window failed validation; the model then
    /// rests at its final position from the start.
    pub entrance: Option<EntranceConfig>,
    pub rotation: RotationConfig,
    pub rules: Vec<PropertyRule>,
    pub tooltips: Vec<TooltipRule>,
    pub char_reveals: Vec<CharReveal>,
}

impl ChoreoConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The production page configuration.
    pub fn production() -> (Self, Vec<ConfigError>) {
        let builder = ConfigBuilder::default().entrance(
            Window::new("entrance", ENTRANCE_START, ENTRANCE_END),
            ENTRANCE_DROP_FACTOR,
        );
        let builder = production_rules()
            .into_iter()
            .fold(builder, ConfigBuilder::rule);
        let builder = production_tooltips()
            .into_iter()
            .fold(builder, ConfigBuilder::tooltip);
        builder
            .char_reveal(Window::from_pair("hero-chars", HEADER_IN).map(|window| CharReveal {
                target: TargetId::new("#hero-heading"),
                window,
                stagger: HEADER_CHAR_STAGGER,
                easing: Easing::PowerOut(2),
            }))
            .build()
    }
}

impl Default for ChoreoConfig {
    fn default() -> Self {
        Self::production().0
    }
}

/// Accumulates rules and the errors of rules that were rejected.
#[derive(Debug)]
pub struct ConfigBuilder {
    config: ChoreoConfig,
    errors: Vec<ConfigError>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            config: ChoreoConfig {
                profiles: DeviceProfiles::default(),
                entrance: None,
                rotation: RotationConfig {
                    turns: ROTATION_TURNS,
                    epsilon: ROTATION_EPSILON_RAD,
                },
                rules: Vec::new(),
                tooltips: Vec::new(),
                char_reveals: Vec::new(),
            },
            errors: Vec::new(),
        }
    }
}

impl ConfigBuilder {
    pub fn profiles(mut self, profiles: DeviceProfiles) -> Self {
        if profiles.breakpoint > 0.0 && profiles.breakpoint.is_finite() {
            self.config.profiles = profiles;
        } else {
            self.errors
                .push(ConfigError::InvalidBreakpoint(profiles.breakpoint));
        }
        self
    }

    pub fn entrance(mut self, window: Result<Window, ConfigError>, drop_factor: f32) -> Self {
        match window {
            Ok(window) => {
                self.config.entrance = Some(EntranceConfig {
                    window,
                    drop_factor,
                })
            }
            Err(e) => self.errors.push(e),
        }
        self
    }

    pub fn rotation(mut self, rotation: RotationConfig) -> Self {
        self.config.rotation = rotation;
        self
    }

    pub fn rule(mut self, rule: Result<PropertyRule, ConfigError>) -> Self {
        match rule {
            Ok(rule) => {
                if let Some(existing) = self
                    .config
                    .rules
                    .iter()
                    .find(|r| r.target == rule.target && r.property == rule.property)
                {
                    // one evaluator per (target, property)
                    self.errors.push(ConfigError::OverlappingSegments {
                        name: format!("{} (duplicates {})", rule.name, existing.name),
                        at: rule.segments()[0].window.start(),
                    });
                } else {
                    self.config.rules.push(rule);
                }
            }
            Err(e) => self.errors.push(e),
        }
        self
    }

    pub fn tooltip(mut self, tooltip: Result<TooltipRule, ConfigError>) -> Self {
        match tooltip {
            Ok(t) => self.config.tooltips.push(t),
            Err(e) => self.errors.push(e),
        }
        self
    }

    pub fn char_reveal(mut self, reveal: Result<CharReveal, ConfigError>) -> Self {
        match reveal {
            Ok(r) => self.config.char_reveals.push(r),
            Err(e) => self.errors.push(e),
        }
        self
    }

    /// Finish, logging each rejected rule.
    pub fn build(self) -> (ChoreoConfig, Vec<ConfigError>) {
        for e in &self.errors {
            log::warn!("[config] rule dropped: {e}");
        }
        (self.config, self.errors)
    }
}

fn segment(name: &str, window: (f64, f64), from: Value, to: Value) -> Result<Segment, ConfigError> {
    Ok(Segment::linear(Window::from_pair(name, window)?, from, to))
}

fn rule(
    name: &str,
    target: &str,
    property: Property,
    segments: Vec<Result<Segment, ConfigError>>,
) -> Result<PropertyRule, ConfigError> {
    let segments = segments.into_iter().collect::<Result<Vec<_>, _>>()?;
    PropertyRule::new(name, TargetId::new(target), property, segments)
}

fn production_rules() -> Vec<Result<PropertyRule, ConfigError>> {
    vec![
        rule(
            "hero-opacity",
            "#hero-heading",
            Property::Opacity,
            vec![
                segment("hero-in", HEADER_IN, Value::Unitless(0.0), Value::Unitless(1.0)),
                segment("hero-out", HEADER_OUT, Value::Unitless(1.0), Value::Unitless(0.0)),
            ],
        ),
        // enters from the right, leaves to the left
        rule(
            "hero-offset",
            "#hero-heading",
            Property::TranslateX,
            vec![
                segment("hero-in", HEADER_IN, Value::Px(HEADER_SLIDE_PX), Value::Px(0.0)),
                segment("hero-out", HEADER_OUT, Value::Px(0.0), Value::Px(-HEADER_SLIDE_PX)),
            ],
        ),
        rule(
            "mask-reveal",
            "#reveal-mask",
            Property::ClipCircle,
            vec![segment(
                "mask",
                MASK_REVEAL,
                Value::Percent(0.0),
                Value::Percent(100.0),
            )],
        ),
        rule(
            "section-background",
            "#product-section",
            Property::BackgroundColor,
            vec![segment(
                "background",
                BACKGROUND_FADE,
                Value::Color(Rgb::WHITE),
                Value::Color(Rgb::BLACK),
            )],
        ),
        rule(
            "section-copy",
            "#product-section",
            Property::Color,
            vec![segment(
                "background",
                BACKGROUND_FADE,
                Value::Color(Rgb::BLACK),
                Value::Color(Rgb::WHITE),
            )],
        ),
        rule(
            "container-grow",
            "#model-container",
            Property::Scale,
            vec![segment(
                "container",
                CONTAINER_GROW,
                Value::Unitless(0.8),
                Value::Unitless(1.0),
            )],
        ),
        rule(
            "closing-opacity",
            "#closing-heading",
            Property::Opacity,
            vec![segment(
                "closing-in",
                CLOSING_HEADER_IN,
                Value::Unitless(0.0),
                Value::Unitless(1.0),
            )],
        ),
        rule(
            "closing-rise",
            "#closing-heading",
            Property::TranslateY,
            vec![Window::from_pair("closing-in", CLOSING_HEADER_IN).map(|w| {
                Segment::eased(w, Value::Px(40.0), Value::Px(0.0), Easing::PowerOut(2))
            })],
        ),
    ]
}

fn tooltip_timeline(id: &str) -> Result<ScrubTimeline, ConfigError> {
    let dot = TargetId::new(format!("{id} .tooltip-dot"));
    let label = TargetId::new(format!("{id} .tooltip-label"));
    let dot_span = Window::new("tooltip-dot", 0.0, 1.0 - TOOLTIP_LABEL_DELAY)?;
    let label_span = Window::new("tooltip-label", TOOLTIP_LABEL_DELAY, 1.0)?;
    Ok(ScrubTimeline::new(vec![
        Track {
            target: dot,
            property: Property::Opacity,
            span: dot_span,
            from: Value::Unitless(0.0),
            to: Value::Unitless(1.0),
            easing: Easing::Linear,
        },
        Track {
            target: label.clone(),
            property: Property::Opacity,
            span: label_span,
            from: Value::Unitless(0.0),
            to: Value::Unitless(1.0),
            easing: Easing::Linear,
        },
        Track {
            target: label,
            property: Property::TranslateY,
            span: label_span,
            from: Value::Px(TOOLTIP_RISE_PX),
            to: Value::Px(0.0),
            easing: Easing::PowerOut(2),
        },
    ]))
}

fn production_tooltips() -> Vec<Result<TooltipRule, ConfigError>> {
    TOOLTIP_WINDOWS
        .iter()
        .enumerate()
        .map(|(i, (show, hide))| {
            let id = format!("#tooltip-{}", i + 1);
            let show = Window::from_pair(&id, *show)?;
            let hide = Window::from_pair(&id, *hide)?;
            TooltipRule::new(id.clone(), show, Some(hide), tooltip_timeline(&id)?)
        })
        .collect()
}
