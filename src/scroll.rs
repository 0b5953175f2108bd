use crate::dom;
use crate::page::PageContext;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Coalesce scroll events into at most one choreography update per frame;
/// the update always reads the latest scroll position.
pub fn wire_scroll(window: &web::Window, ctx: Rc<RefCell<PageContext>>) {
    let queued = Rc::new(Cell::new(false));

    let tick = {
        let queued = queued.clone();
        Closure::wrap(Box::new(move || {
            queued.set(false);
            ctx.borrow_mut().sync_scroll();
        }) as Box<dyn FnMut()>)
    };

    let raf_window = window.clone();
    dom::add_window_listener(window, "scroll", move || {
        if queued.replace(true) {
            return;
        }
        if raf_window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .is_err()
        {
            queued.set(false);
        }
    });
}
