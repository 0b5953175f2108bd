// Selector lookup cache, kept free of web-sys so it can be tested on the host.

use fnv::FnvHashMap;

/// Lookup results per selector. Empty results are never stored, so a target
/// that appears after its first lookup is found on the next one.
pub struct SelectorCache<T> {
    entries: FnvHashMap<String, Vec<T>>,
}

impl<T> Default for SelectorCache<T> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<T> SelectorCache<T> {
    pub fn get_or_lookup(
        &mut self,
        selector: &str,
        lookup: impl FnOnce(&str) -> Vec<T>,
    ) -> &[T] {
        if !self.entries.contains_key(selector) {
            let found = lookup(selector);
            if found.is_empty() {
                log::debug!("[cache] no elements for {selector}");
                return &[];
            }
            self.entries.insert(selector.to_owned(), found);
        }
        self.entries
            .get(selector)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
