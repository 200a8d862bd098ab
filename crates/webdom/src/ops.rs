//! Trait abstractions over the host page, mirrored by mocks for tests.

use async_trait::async_trait;

use crate::{ClipboardError, ElementHandle, LinkHandle};

/// Read-only queries against the live DOM.
pub trait DomOps: Send + Sync {
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementHandle>;

    /// First element matching `selector`, if any.
    fn query_first(&self, selector: &str) -> Option<ElementHandle> {
        self.query_all(selector).into_iter().next()
    }

    /// The element's activation link: itself if it is a link, otherwise
    /// its first descendant link carrying an href.
    fn activation_link(&self, element: &ElementHandle) -> Option<LinkHandle>;

    /// Rendered height in CSS pixels; zero for collapsed or display:none
    /// elements.
    fn rendered_height(&self, element: &ElementHandle) -> f64;

    /// True while the page's active element accepts text input (input,
    /// textarea, or content-editable). Keystrokes are never intercepted
    /// in that state.
    fn editable_focused(&self) -> bool;
}

/// Visual side effects on the page, owned by the embedding.
pub trait VisualOps: Send + Sync {
    /// Apply the "current result" marker to an element.
    fn mark_current(&self, element: &ElementHandle);

    /// Remove the marker from an element. Safe to call when the element
    /// is not marked.
    fn clear_current(&self, element: &ElementHandle);

    /// Smooth-scroll an element to the vertical center of the viewport.
    fn scroll_center(&self, element: &ElementHandle);

    /// Show or hide the help overlay.
    fn set_help_visible(&self, visible: bool);

    /// Show a transient toast message.
    fn toast(&self, text: &str);
}

/// Browsing-context navigation.
pub trait NavOps: Send + Sync {
    /// Navigate the current browsing context to `url`.
    fn navigate(&self, url: &str);

    /// Open `url` in a new browsing context.
    fn open_new_context(&self, url: &str);
}

/// The asynchronous clipboard boundary.
#[async_trait]
pub trait ClipboardOps: Send + Sync {
    /// Write `text` to the system clipboard.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
