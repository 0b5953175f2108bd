use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom;
use crate::page::PageContext;
use choreo_core::{Debouncer, Scheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Scheduler`] backed by `setTimeout`/`clearTimeout`. Every expiry is
/// reported to `on_fire` with the handle that produced it.
pub struct TimeoutScheduler {
    window: web::Window,
    on_fire: Rc<dyn Fn(i32)>,
}

impl Scheduler for TimeoutScheduler {
    type Handle = i32;

    fn schedule(&mut self, delay_ms: u32) -> i32 {
        // the handle is only known after setTimeout returns
        let slot = Rc::new(Cell::new(-1));
        let slot_cb = slot.clone();
        let on_fire = self.on_fire.clone();
        let callback = Closure::once_into_js(move || on_fire(slot_cb.get()));
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms as i32,
            )
            .unwrap_or_else(|e| {
                log::warn!("[resize] setTimeout failed: {:?}", e);
                -1
            });
        slot.set(handle);
        handle
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}

/// Relayout immediately on every resize; rebuild split text once the burst settles.
pub fn wire_resize(window: &web::Window, ctx: Rc<RefCell<PageContext>>) {
    let debouncer = Rc::new(RefCell::new(Debouncer::<i32>::new(RESIZE_DEBOUNCE_MS)));

    let on_fire: Rc<dyn Fn(i32)> = {
        let debouncer = debouncer.clone();
        let ctx = ctx.clone();
        Rc::new(move |handle| {
            let fresh = debouncer.borrow_mut().fire(handle);
            if fresh {
                ctx.borrow_mut().resplit();
            }
        })
    };
    let mut scheduler = TimeoutScheduler {
        window: window.clone(),
        on_fire,
    };

    dom::add_window_listener(window, "resize", move || {
        ctx.borrow_mut().relayout();
        debouncer.borrow_mut().trigger(&mut scheduler);
    });
}
