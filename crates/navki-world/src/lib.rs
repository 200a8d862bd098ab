//! Result location: the ordered, filtered view of a page's results.
//!
//! [`Results`] owns the list the cursor indexes into. It is rebuilt
//! wholesale from the DOM on every change notification; the previous list
//! is discarded, never patched. Cursor reconciliation is deliberately NOT
//! done here: consumers clamp against the current length at the moment
//! they move, so a stale cursor costs nothing until it is next used.

use config::SiteProfile;
use tracing::trace;
use webdom::{DomOps, ElementHandle};

/// The current result list for one page context.
///
/// Invariant at rebuild time: every member matches the site's result
/// query, has an activation link, and has non-zero rendered height.
/// Order is DOM document order.
#[derive(Debug, Default)]
pub struct Results {
    entries: Vec<ElementHandle>,
    generation: u64,
}

impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current list and relocate results from the live DOM.
    pub fn rebuild(&mut self, dom: &dyn DomOps, profile: &SiteProfile) {
        let mut entries = Vec::new();
        for element in dom.query_all(&profile.result_query) {
            if dom.activation_link(&element).is_none() {
                continue;
            }
            if dom.rendered_height(&element) <= 0.0 {
                continue;
            }
            entries.push(element);
        }
        self.generation = self.generation.wrapping_add(1);
        trace!(
            generation = self.generation,
            len = entries.len(),
            "result list rebuilt"
        );
        self.entries = entries;
    }

    /// Number of results in the current list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The element at `index` in the current list.
    pub fn get(&self, index: usize) -> Option<&ElementHandle> {
        self.entries.get(index)
    }

    /// How many times the list has been rebuilt. Diagnostic only.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
