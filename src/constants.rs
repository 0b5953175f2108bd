/// Page wiring constants: element selectors, asset locations and timings.
///
/// The stylesheet composes transforms from the custom properties written by
/// the choreographer (`--tx`, `--ty`, `--scale`, `--base-scale`).
// Elements
pub const CANVAS_ID: &str = "product-canvas";
pub const PINNED_SECTION_ID: &str = "product-section";
pub const MODEL_CONTAINER_SELECTOR: &str = "#model-container";
pub const SPLIT_SELECTOR: &str = "[data-split]";
pub const SPLIT_SOURCE_ATTR: &str = "data-split-source";
pub const CHAR_CLASS: &str = "char";
pub const SPACE_CLASS: &str = "space";
pub const PHASE_ATTR: &str = "data-phase";

// Renderer bridge
pub const VIEWER_GLOBAL: &str = "productViewer";
pub const MODEL_URL: &str = "assets/product.glb";

// Capability fallback
pub const WEBGL_CONTEXT_KINDS: [&str; 2] = ["webgl2", "webgl"]; // probed in order
pub const FALLBACK_CLASS: &str = "webgl-fallback";
pub const FALLBACK_MESSAGE: &str =
    "Your browser does not support WebGL, so the interactive product view is unavailable.";

// Timings (milliseconds)
pub const RESIZE_DEBOUNCE_MS: u32 = 250; // coalesce resize bursts before re-splitting text
pub const SPLIT_SETTLE_MS: u32 = 100; // let fonts and layout settle before the first split

// Split characters rise from this far below their line (percent of their height)
pub const CHAR_RISE_PERCENT: f64 = 100.0;
