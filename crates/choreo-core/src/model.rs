use crate::device::{DeviceClass, DeviceProfiles};
use crate::layout::{compute_layout, BoundingBox, ModelLayout};
use crate::window::Window;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedModel {
    pub bounds: BoundingBox,
    pub layout: ModelLayout,
}

/// Outcome of the one-shot model load.
///
/// Consumers match on this instead of null-checking; `Pending` and `Failed`
/// make every model rule a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModelState {
    #[default]
    Pending,
    Loaded(LoadedModel),
    Failed(String),
}

impl ModelState {
    pub fn loaded(bounds: BoundingBox, device: DeviceClass, profiles: &DeviceProfiles) -> Self {
        ModelState::Loaded(LoadedModel {
            bounds,
            layout: compute_layout(device, &bounds, profiles),
        })
    }

    /// Recompute the resting layout after a resize. No-op unless loaded.
    pub fn relayout(&mut self, device: DeviceClass, profiles: &DeviceProfiles) {
        if let ModelState::Loaded(model) = self {
            model.layout = compute_layout(device, &model.bounds, profiles);
        }
    }

    pub fn layout(&self) -> Option<&ModelLayout> {
        match self {
            ModelState::Loaded(model) => Some(&model.layout),
            ModelState::Pending | ModelState::Failed(_) => None,
        }
    }
}

/// Entrance settings: the window and how many vertical extents below rest
/// the model starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceConfig {
    pub window: Window,
    pub drop_factor: f32,
}

/// Vertical model position during and after the entrance window.
///
/// `final_y - (1 - t) * extent_y * drop_factor`; exactly `final_y` once the
/// window has completed.
#[inline]
pub fn entrance_y(progress: f64, layout: &ModelLayout, entrance: &EntranceConfig) -> f32 {
    let t = entrance.window.progress(progress) as f32;
    layout.final_position.y - (1.0 - t) * layout.extent.y * entrance.drop_factor
}

/// Transform the renderer should hold for the current progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPose {
    pub position: Vec3,
    /// Fixed per-device tilt about X.
    pub rotation_x: f32,
    /// Scroll-driven spin about Y (closed form, not accumulated).
    pub rotation_y: f32,
    pub camera_distance: f32,
    pub container_scale: f32,
}
