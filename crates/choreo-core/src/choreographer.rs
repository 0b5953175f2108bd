use crate::config::ChoreoConfig;
use crate::device::{DeviceClass, Viewport};
use crate::layout::BoundingBox;
use crate::model::{entrance_y, ModelPose, ModelState};
use crate::rotation::{spin_angle, RotationState};
use crate::stagger::stagger;
use crate::table::{Property, TargetId, Value};
use crate::timeline::TooltipState;
use smallvec::SmallVec;

/// One (target, property, value) write produced by a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub target: TargetId,
    pub property: Property,
    pub value: Value,
}

/// Per-character sub-progress for one split headline.
#[derive(Clone, Debug, PartialEq)]
pub struct CharProgress {
    pub target: TargetId,
    pub values: Vec<f64>,
}

/// Everything the front-end must apply for one progress value.
///
/// All fields except `rotation_delta` are a pure function of the progress,
/// viewport, model state and configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub progress: f64,
    pub assignments: SmallVec<[Assignment; 16]>,
    pub chars: Vec<CharProgress>,
    pub tooltips: SmallVec<[TooltipState; 4]>,
    pub model: Option<ModelPose>,
    /// Incremental spin to forward to the renderer, if above epsilon.
    pub rotation_delta: Option<f32>,
}

/// Maps scroll progress to the visual state of the page.
pub struct Choreographer {
    config: ChoreoConfig,
    viewport: Viewport,
    device: DeviceClass,
    model: ModelState,
    rotation: RotationState,
    progress: f64,
    char_counts: Vec<usize>,
}

impl Choreographer {
    pub fn new(config: ChoreoConfig, viewport: Viewport) -> Self {
        let device = config.profiles.classify(&viewport);
        let char_counts = vec![0; config.char_reveals.len()];
        log::info!(
            "[choreo] {} rules, {} tooltips, device={:?}",
            config.rules.len(),
            config.tooltips.len(),
            device
        );
        Self {
            config,
            viewport,
            device,
            model: ModelState::Pending,
            rotation: RotationState::default(),
            progress: 0.0,
            char_counts,
        }
    }

    pub fn config(&self) -> &ChoreoConfig {
        &self.config
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn model_state(&self) -> &ModelState {
        &self.model
    }

    pub fn rotation_state(&self) -> RotationState {
        self.rotation
    }

    /// Reclassify the device and recompute the model layout.
    /// Returns `true` when the device class changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        let device = self.config.profiles.classify(&viewport);
        let changed = device != self.device;
        self.viewport = viewport;
        self.device = device;
        self.model.relayout(device, &self.config.profiles);
        if changed {
            log::info!("[choreo] device class now {:?}", device);
        }
        changed
    }

    /// Record the split character count of a headline; unknown targets are ignored.
    pub fn set_char_count(&mut self, target: &TargetId, count: usize) {
        for (reveal, slot) in self.config.char_reveals.iter().zip(&mut self.char_counts) {
            if &reveal.target == target {
                *slot = count;
            }
        }
    }

    /// Model load succeeded. Returns the frame for the *current* progress so a
    /// page opened mid-scroll shows the right entrance state at once.
    pub fn model_loaded(&mut self, bounds: BoundingBox) -> Frame {
        self.model = ModelState::loaded(bounds, self.device, &self.config.profiles);
        self.rotation = RotationState::default();
        log::info!("[choreo] model loaded at progress {:.3}", self.progress);
        self.update(self.progress)
    }

    /// Model load failed. All model rules stay no-ops for the rest of the session.
    pub fn model_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("[choreo] model failed to load: {reason}");
        self.model = ModelState::Failed(reason);
    }

    /// Re-derive the frame at the last known progress (after resize or relayout).
    pub fn refresh(&mut self) -> Frame {
        self.update(self.progress)
    }

    /// Evaluate every rule at `progress`. Non-finite input repeats the last value.
    pub fn update(&mut self, progress: f64) -> Frame {
        if progress.is_finite() {
            self.progress = progress.clamp(0.0, 1.0);
        }
        let p = self.progress;
        let mut frame = self.frame_at(p);
        if self.model.layout().is_some() {
            let (rotation, delta) = self.rotation.step(p, &self.config.rotation);
            self.rotation = rotation;
            frame.rotation_delta = delta;
        }
        frame
    }

    /// The stateless part of a frame; never touches rotation.
    /// Non-finite input falls back to the last known progress.
    pub fn frame_at(&self, progress: f64) -> Frame {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            self.progress
        };

        let mut assignments: SmallVec<[Assignment; 16]> = self
            .config
            .rules
            .iter()
            .map(|rule| Assignment {
                target: rule.target.clone(),
                property: rule.property,
                value: rule.evaluate(p),
            })
            .collect();

        let mut tooltips = SmallVec::new();
        for tooltip in &self.config.tooltips {
            let timeline = tooltip.scrub(p);
            assignments.extend(
                timeline
                    .sample()
                    .into_iter()
                    .map(|(target, property, value)| Assignment {
                        target,
                        property,
                        value,
                    }),
            );
            tooltips.push(TooltipState {
                name: tooltip.name.clone(),
                head: timeline.head(),
                phase: timeline.phase(),
            });
        }

        let chars = self
            .config
            .char_reveals
            .iter()
            .zip(&self.char_counts)
            .map(|(reveal, &count)| {
                let t = reveal.window.progress(p);
                CharProgress {
                    target: reveal.target.clone(),
                    values: (0..count)
                        .map(|i| reveal.easing.apply(stagger(t, i, count, reveal.stagger)))
                        .collect(),
                }
            })
            .collect();

        let model = self.model.layout().map(|layout| {
            let mut position = layout.final_position;
            if let Some(entrance) = &self.config.entrance {
                position.y = entrance_y(p, layout, entrance);
            }
            ModelPose {
                position,
                rotation_x: layout.tilt_rad,
                rotation_y: spin_angle(p, &self.config.rotation),
                camera_distance: layout.camera_distance,
                container_scale: layout.container_scale,
            }
        });

        Frame {
            progress: p,
            assignments,
            chars,
            tooltips,
            model,
            rotation_delta: None,
        }
    }
}
