use crate::constants::{CHAR_CLASS, SPACE_CLASS, SPLIT_SELECTOR, SPLIT_SOURCE_ATTR};
use crate::dom;
use crate::text::{animated_count, split_chars};
use instant::Instant;
use web_sys as web;

/// Rebuild every `[data-split]` heading into per-character spans.
///
/// The previous split is discarded; the original text is kept in
/// `data-split-source` so repeated rebuilds never split spans of spans.
/// Returns `(selector, character count)` for each heading with an id.
pub fn rebuild_all(document: &web::Document) -> Vec<(String, usize)> {
    let started = Instant::now();
    let mut counts = Vec::new();
    for el in dom::query_all(document, SPLIT_SELECTOR) {
        let source = match el.get_attribute(SPLIT_SOURCE_ATTR) {
            Some(s) => s,
            None => {
                let text = el.text_content().unwrap_or_default();
                _ = el.set_attribute(SPLIT_SOURCE_ATTR, &text);
                text
            }
        };
        let tokens = split_chars(&source);
        el.set_inner_html("");
        for token in &tokens {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_class_name(if token.animated { CHAR_CLASS } else { SPACE_CLASS });
            span.set_text_content(Some(&token.text));
            _ = el.append_child(&span);
        }
        let id = el.id();
        if id.is_empty() {
            log::warn!("[split] heading without id is split but not animated");
            continue;
        }
        counts.push((format!("#{id}"), animated_count(&tokens)));
    }
    log::debug!(
        "[split] rebuilt {} headings in {:?}",
        counts.len(),
        started.elapsed()
    );
    counts
}

/// Selector for the character spans of a split heading.
#[inline]
pub fn char_selector(heading: &str) -> String {
    format!("{heading} .{CHAR_CLASS}")
}
