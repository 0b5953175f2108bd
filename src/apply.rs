use crate::cache::SelectorCache;
use crate::constants::{MODEL_CONTAINER_SELECTOR, PHASE_ATTR};
use crate::dom;
use crate::measure::char_style;
use crate::split::char_selector;
use crate::viewer::ProductViewer;
use choreo_core::{Frame, TooltipPhase};
use web_sys as web;

/// Resolved elements per target selector. Cleared whenever the DOM under a
/// target is rebuilt (text splitting).
pub struct TargetCache {
    document: web::Document,
    elements: SelectorCache<web::HtmlElement>,
}

impl TargetCache {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            elements: SelectorCache::default(),
        }
    }

    pub fn resolve(&mut self, selector: &str) -> &[web::HtmlElement] {
        let document = &self.document;
        self.elements.get_or_lookup(selector, |sel| dom::query_all(document, sel))
    }

    pub fn invalidate(&mut self) {
        self.elements.clear();
    }
}

fn phase_name(phase: TooltipPhase) -> &'static str {
    match phase {
        TooltipPhase::Hidden => "hidden",
        TooltipPhase::Transitioning => "transitioning",
        TooltipPhase::Visible => "visible",
    }
}

pub fn apply_frame(targets: &mut TargetCache, viewer: Option<&ProductViewer>, frame: &Frame) {
    for a in &frame.assignments {
        let css = a.value.to_css(a.property);
        for el in targets.resolve(a.target.as_str()) {
            dom::set_style(el, a.property.css_name(), &css);
        }
    }

    for chars in &frame.chars {
        let selector = char_selector(chars.target.as_str());
        for (el, t) in targets.resolve(&selector).iter().zip(&chars.values) {
            let (opacity, transform) = char_style(*t);
            dom::set_style(el, "opacity", &opacity);
            dom::set_style(el, "transform", &transform);
        }
    }

    for tip in &frame.tooltips {
        for el in targets.resolve(&tip.name) {
            _ = el.set_attribute(PHASE_ATTR, phase_name(tip.phase));
        }
    }

    if let Some(pose) = &frame.model {
        let scale = pose.container_scale.to_string();
        for el in targets.resolve(MODEL_CONTAINER_SELECTOR) {
            dom::set_style(el, "--base-scale", &scale);
        }
        if let Some(viewer) = viewer {
            viewer.apply_pose(pose);
        }
    }
    if let (Some(viewer), Some(delta)) = (viewer, frame.rotation_delta) {
        viewer.rotate_y(delta);
    }
}
