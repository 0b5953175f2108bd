use crate::constants::*;
use glam::Vec3;

/// Viewport classification selecting which [`DeviceProfile`] applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width (CSS px); widths below `breakpoint` are mobile.
    #[inline]
    pub fn from_viewport_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Viewport size in CSS pixels, supplied on load and on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height.max(1.0)
    }
}

/// Per-device constant set.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfile {
    /// Resting position as a factor of the model extent on each axis.
    pub offset: Vec3,
    /// Fixed tilt about the X axis, in degrees. Not driven by scroll.
    pub tilt_deg: f32,
    /// Camera distance as a multiple of the model's largest dimension.
    pub camera_factor: f32,
    /// Base scale of the element hosting the render surface.
    pub container_scale: f32,
}

impl DeviceProfile {
    pub fn desktop() -> Self {
        Self {
            offset: DESKTOP_OFFSET,
            tilt_deg: DESKTOP_TILT_DEG,
            camera_factor: DESKTOP_CAMERA_FACTOR,
            container_scale: DESKTOP_CONTAINER_SCALE,
        }
    }

    pub fn mobile() -> Self {
        Self {
            offset: MOBILE_OFFSET,
            tilt_deg: MOBILE_TILT_DEG,
            camera_factor: MOBILE_CAMERA_FACTOR,
            container_scale: MOBILE_CONTAINER_SCALE,
        }
    }
}

/// Both profiles plus the breakpoint that chooses between them.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfiles {
    pub breakpoint: f64,
    pub mobile: DeviceProfile,
    pub desktop: DeviceProfile,
}

impl Default for DeviceProfiles {
    fn default() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT_PX,
            mobile: DeviceProfile::mobile(),
            desktop: DeviceProfile::desktop(),
        }
    }
}

impl DeviceProfiles {
    pub fn classify(&self, viewport: &Viewport) -> DeviceClass {
        DeviceClass::from_viewport_width(viewport.width, self.breakpoint)
    }

    pub fn get(&self, device: DeviceClass) -> &DeviceProfile {
        match device {
            DeviceClass::Mobile => &self.mobile,
            DeviceClass::Desktop => &self.desktop,
        }
    }
}
