use crate::constants::{FALLBACK_CLASS, FALLBACK_MESSAGE, WEBGL_CONTEXT_KINDS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// All elements matching `selector`, as `HtmlElement`s.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] invalid selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Probe for WebGL on a detached scratch canvas. A canvas keeps the first
/// context it hands out, so the render surface itself must stay untouched
/// until the viewer mounts.
pub fn has_webgl(document: &web::Document) -> bool {
    let Some(scratch) = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return false;
    };
    WEBGL_CONTEXT_KINDS
        .iter()
        .any(|kind| matches!(scratch.get_context(kind), Ok(Some(_))))
}

/// Replace the render surface with a static message.
pub fn substitute_fallback(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    match document.create_element("div") {
        Ok(div) => {
            div.set_class_name(FALLBACK_CLASS);
            div.set_text_content(Some(FALLBACK_MESSAGE));
            _ = canvas.replace_with_with_node_1(&div);
        }
        Err(e) => log::error!("[dom] cannot build fallback: {:?}", e),
    }
}

/// Run `f` once after `delay_ms`. Returns the timeout handle.
pub fn set_timeout(window: &web::Window, delay_ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        )
        .map_err(|e| log::warn!("[dom] setTimeout failed: {:?}", e))
        .ok()
}

pub fn add_window_listener(window: &web::Window, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
