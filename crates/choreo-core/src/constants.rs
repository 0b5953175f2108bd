use glam::Vec3;

// Shared choreography tuning used to build the default configuration.

// Device classification
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // widths below this are mobile

// Model entrance
pub const ENTRANCE_START: f64 = 0.0;
pub const ENTRANCE_END: f64 = 0.08; // entrance finishes within the first 8% of the pin
pub const ENTRANCE_DROP_FACTOR: f32 = 1.5; // start this many vertical extents below rest

// Scroll-driven spin
pub const ROTATION_TURNS: f32 = 2.0; // full turns across the whole pinned range
pub const ROTATION_EPSILON_RAD: f32 = 1e-4; // smaller deltas are not forwarded

// Desktop placement (factors of model extent)
pub const DESKTOP_OFFSET: Vec3 = Vec3::new(0.35, -0.05, 0.0);
pub const DESKTOP_TILT_DEG: f32 = 12.0;
pub const DESKTOP_CAMERA_FACTOR: f32 = 1.9;
pub const DESKTOP_CONTAINER_SCALE: f32 = 1.0;

// Mobile placement (factors of model extent)
pub const MOBILE_OFFSET: Vec3 = Vec3::new(0.0, -0.25, 0.0);
pub const MOBILE_TILT_DEG: f32 = 6.0;
pub const MOBILE_CAMERA_FACTOR: f32 = 2.6;
pub const MOBILE_CONTAINER_SCALE: f32 = 0.85;

// Progress windows (fractions of the pinned scroll distance)
pub const HEADER_IN: (f64, f64) = (0.02, 0.12);
pub const HEADER_OUT: (f64, f64) = (0.16, 0.24);
pub const MASK_REVEAL: (f64, f64) = (0.2, 0.28);
pub const BACKGROUND_FADE: (f64, f64) = (0.3, 0.4);
pub const CONTAINER_GROW: (f64, f64) = (0.4, 0.55);
pub const CLOSING_HEADER_IN: (f64, f64) = (0.85, 0.95);

// Header travel
pub const HEADER_SLIDE_PX: f64 = 120.0;
pub const HEADER_CHAR_STAGGER: f64 = 0.04;

// Tooltip show/hide windows
pub const TOOLTIP_WINDOWS: [((f64, f64), (f64, f64)); 3] = [
    ((0.45, 0.5), (0.58, 0.62)),
    ((0.6, 0.65), (0.73, 0.77)),
    ((0.75, 0.8), (0.88, 0.92)),
];
pub const TOOLTIP_RISE_PX: f64 = 24.0;
pub const TOOLTIP_LABEL_DELAY: f64 = 0.3; // label starts this far into the tooltip timeline

// Mask radii are reported in thousandths of a percent
pub const MASK_QUANTUM: f64 = 1000.0;
