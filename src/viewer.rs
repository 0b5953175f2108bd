use crate::constants::VIEWER_GLOBAL;
use crate::measure;
use anyhow::anyhow;
use choreo_core::{BoundingBox, ModelPose};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Renderer bundle exposed by the page as `window.productViewer`. It owns
    /// the scene, camera, GLTF loading and the per-frame draw.
    pub type ProductViewer;

    #[wasm_bindgen(method)]
    pub fn mount(this: &ProductViewer, canvas: &web::HtmlCanvasElement);

    /// Resolves to `[minX, minY, minZ, maxX, maxY, maxZ]` of the loaded model.
    #[wasm_bindgen(method)]
    pub fn load(this: &ProductViewer, url: &str) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = setPosition)]
    pub fn set_position(this: &ProductViewer, x: f32, y: f32, z: f32);

    #[wasm_bindgen(method, js_name = setRotationX)]
    pub fn set_rotation_x(this: &ProductViewer, radians: f32);

    #[wasm_bindgen(method, js_name = rotateY)]
    pub fn rotate_y(this: &ProductViewer, delta: f32);

    #[wasm_bindgen(method, js_name = setCameraDistance)]
    pub fn set_camera_distance(this: &ProductViewer, distance: f32);

    #[wasm_bindgen(method)]
    pub fn resize(this: &ProductViewer, width: f64, height: f64);
}

impl ProductViewer {
    pub fn from_window(window: &web::Window) -> anyhow::Result<ProductViewer> {
        let value = js_sys::Reflect::get(window, &JsValue::from_str(VIEWER_GLOBAL))
            .map_err(|e| anyhow!("{:?}", e))?;
        if value.is_undefined() || value.is_null() {
            return Err(anyhow!("window.{VIEWER_GLOBAL} is missing"));
        }
        Ok(value.unchecked_into())
    }

    pub fn apply_pose(&self, pose: &ModelPose) {
        self.set_position(pose.position.x, pose.position.y, pose.position.z);
        self.set_rotation_x(pose.rotation_x);
        self.set_camera_distance(pose.camera_distance);
    }
}

/// Load the model once and report its bounds.
pub async fn load_bounds(viewer: &ProductViewer, url: &str) -> anyhow::Result<BoundingBox> {
    let value = JsFuture::from(viewer.load(url))
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    let values: Vec<f64> = js_sys::Array::from(&value)
        .iter()
        .filter_map(|v| v.as_f64())
        .collect();
    measure::bounds_from_array(&values)
        .ok_or_else(|| anyhow!("viewer returned malformed bounds: {:?}", value))
}
