//! The visual focus side effect: marker plus centering scroll.

use webdom::{ElementHandle, VisualOps};

/// Tracks which element currently carries the marker so it can be cleared
/// before the next one is marked.
#[derive(Debug, Default)]
pub(crate) struct FocusRing {
    marked: Option<ElementHandle>,
}

impl FocusRing {
    /// Move the marker to `element` and request a centering scroll.
    /// Idempotent: re-applying to the already-current element leaves a
    /// single marker in place.
    pub(crate) fn apply(&mut self, visual: &dyn VisualOps, element: &ElementHandle) {
        if let Some(prev) = self.marked
            && prev != *element
        {
            visual.clear_current(&prev);
        }
        visual.mark_current(element);
        visual.scroll_center(element);
        self.marked = Some(*element);
    }
}
