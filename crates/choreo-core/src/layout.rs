//! Device-dependent resting layout of the product model.
//!
//! Everything here is a pure function of the device class, the model's
//! bounding box and static configuration. Callers recompute on resize and
//! on model load; nothing is cached between calls.

use crate::device::{DeviceClass, DeviceProfiles};
use glam::Vec3;

/// Axis-aligned bounds reported by the renderer for the loaded scene graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The model extent (bounding-box size on each axis).
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Resting placement derived for one device class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelLayout {
    pub device: DeviceClass,
    pub final_position: Vec3,
    pub extent: Vec3,
    pub tilt_rad: f32,
    pub camera_distance: f32,
    pub container_scale: f32,
}

pub fn compute_layout(
    device: DeviceClass,
    bounds: &BoundingBox,
    profiles: &DeviceProfiles,
) -> ModelLayout {
    let profile = profiles.get(device);
    let extent = bounds.size();
    // re-centre the model on the origin before offsetting
    let final_position = profile.offset * extent - bounds.center();
    let largest = extent.max_element();
    log::debug!(
        "[layout] {:?} extent=({:.3},{:.3},{:.3}) final=({:.3},{:.3},{:.3})",
        device,
        extent.x,
        extent.y,
        extent.z,
        final_position.x,
        final_position.y,
        final_position.z
    );
    ModelLayout {
        device,
        final_position,
        extent,
        tilt_rad: profile.tilt_deg.to_radians(),
        camera_distance: profile.camera_factor * largest,
        container_scale: profile.container_scale,
    }
}
