#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, MODEL_URL, PINNED_SECTION_ID, SPLIT_SETTLE_MS};
use crate::page::PageContext;
use choreo_core::{ChoreoConfig, Choreographer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod apply;
mod cache;
mod constants;
mod dom;
mod measure;
mod page;
mod resize;
mod scroll;
mod split;
mod text;
mod viewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("choreo-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // No rendering context: show the static message and skip choreography for the session
    if !dom::has_webgl(&document) {
        log::info!("[init] WebGL unavailable, using static fallback");
        dom::substitute_fallback(&document, &canvas);
        return Ok(());
    }

    let section = document
        .get_element_by_id(PINNED_SECTION_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{PINNED_SECTION_ID}"))?;
    let viewer = viewer::ProductViewer::from_window(&window)?;
    viewer.mount(&canvas);

    let (config, errors) = ChoreoConfig::production();
    if !errors.is_empty() {
        log::warn!("[init] {} choreography rules disabled", errors.len());
    }
    let (width, height) = dom::viewport_size(&window);
    viewer.resize(width, height);
    let choreo = Choreographer::new(config, choreo_core::Viewport::new(width, height));

    let ctx = Rc::new(RefCell::new(PageContext {
        window: window.clone(),
        document: document.clone(),
        section,
        choreo,
        targets: apply::TargetCache::new(document),
        viewer: viewer.clone(),
    }));

    // Resume at the current scroll offset rather than from the top
    ctx.borrow_mut().sync_scroll();
    scroll::wire_scroll(&window, ctx.clone());
    resize::wire_resize(&window, ctx.clone());

    {
        let ctx = ctx.clone();
        dom::set_timeout(&window, SPLIT_SETTLE_MS, move || ctx.borrow_mut().resplit());
    }

    match viewer::load_bounds(&viewer, MODEL_URL).await {
        Ok(bounds) => ctx.borrow_mut().model_loaded(bounds),
        Err(e) => ctx.borrow_mut().choreo.model_failed(e.to_string()),
    }
    Ok(())
}
