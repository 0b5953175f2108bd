use crate::apply::{apply_frame, TargetCache};
use crate::dom;
use crate::measure::pinned_progress;
use crate::split;
use crate::viewer::ProductViewer;
use choreo_core::{BoundingBox, Choreographer, TargetId, Viewport};
use web_sys as web;

/// Everything the event handlers share. Lives behind `Rc<RefCell<_>>` on the
/// main thread; handlers never hold the borrow across an await.
pub struct PageContext {
    pub window: web::Window,
    pub document: web::Document,
    pub section: web::Element,
    pub choreo: Choreographer,
    pub viewer: ProductViewer,
    pub targets: TargetCache,
}

impl PageContext {
    pub fn viewport(&self) -> Viewport {
        let (width, height) = dom::viewport_size(&self.window);
        Viewport::new(width, height)
    }

    /// Progress measured from the actual scroll position of the pinned section.
    pub fn measure_progress(&self) -> f64 {
        let rect = self.section.get_bounding_client_rect();
        let (_, viewport_height) = dom::viewport_size(&self.window);
        pinned_progress(rect.top(), rect.height(), viewport_height)
    }

    pub fn sync_scroll(&mut self) {
        let progress = self.measure_progress();
        let frame = self.choreo.update(progress);
        apply_frame(&mut self.targets, Some(&self.viewer), &frame);
    }

    /// Reclassify the device and recompute the resting layout.
    pub fn relayout(&mut self) {
        let viewport = self.viewport();
        self.viewer.resize(viewport.width, viewport.height);
        self.choreo.set_viewport(viewport);
        self.sync_scroll();
    }

    /// Discard the previous text split, rebuild it and re-apply the current frame.
    pub fn resplit(&mut self) {
        for (selector, count) in split::rebuild_all(&self.document) {
            self.choreo.set_char_count(&TargetId::new(selector), count);
        }
        self.targets.invalidate();
        self.sync_scroll();
    }

    pub fn model_loaded(&mut self, bounds: BoundingBox) {
        // pick up any scrolling that happened while the asset was in flight
        self.sync_scroll();
        let frame = self.choreo.model_loaded(bounds);
        apply_frame(&mut self.targets, Some(&self.viewer), &frame);
    }
}
