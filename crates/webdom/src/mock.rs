//! Mock boundary implementations used across the workspace's tests and
//! the smoketest runner.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{ClipboardError, ClipboardOps, DomOps, ElementHandle, LinkHandle, NavOps, VisualOps};

/// One simulated page element.
#[derive(Debug, Clone)]
pub struct MockElement {
    /// Handle the element is known by.
    pub handle: ElementHandle,
    /// Selector this element answers to in `query_all`.
    pub selector: String,
    /// Rendered height in CSS pixels.
    pub height: f64,
    /// Href of the element's activation link, when it has one.
    pub href: Option<String>,
}

/// Simulated DOM: a flat list of elements keyed by the selector they
/// match. Document order is insertion order.
#[derive(Clone, Default)]
pub struct MockDom {
    elements: Arc<Mutex<Vec<MockElement>>>,
    editable_focused: Arc<AtomicBool>,
    next_id: Arc<AtomicU64>,
}

impl MockDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one element matching `selector`; returns its handle.
    pub fn push_element(&self, selector: &str, height: f64, href: Option<&str>) -> ElementHandle {
        let handle = ElementHandle(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.elements.lock().push(MockElement {
            handle,
            selector: selector.to_string(),
            height,
            href: href.map(str::to_string),
        });
        handle
    }

    /// Replace all elements matching `selector` with `n` fresh visible
    /// results carrying sequential hrefs.
    pub fn seed_results(&self, selector: &str, n: usize) {
        let mut elements = self.elements.lock();
        elements.retain(|e| e.selector != selector);
        for i in 0..n {
            let handle = ElementHandle(self.next_id.fetch_add(1, Ordering::SeqCst));
            elements.push(MockElement {
                handle,
                selector: selector.to_string(),
                height: 24.0,
                href: Some(format!("https://results.example/item/{i}")),
            });
        }
    }

    /// Drop every element.
    pub fn clear(&self) {
        self.elements.lock().clear();
    }

    pub fn set_editable_focused(&self, v: bool) {
        self.editable_focused.store(v, Ordering::SeqCst);
    }

    /// Mutate one element's rendered height.
    pub fn set_height(&self, handle: ElementHandle, height: f64) {
        if let Some(e) = self.elements.lock().iter_mut().find(|e| e.handle == handle) {
            e.height = height;
        }
    }

    /// Mutate one element's link href (`None` removes the link).
    pub fn set_href(&self, handle: ElementHandle, href: Option<&str>) {
        if let Some(e) = self.elements.lock().iter_mut().find(|e| e.handle == handle) {
            e.href = href.map(str::to_string);
        }
    }
}

impl DomOps for MockDom {
    fn query_all(&self, selector: &str) -> Vec<ElementHandle> {
        self.elements
            .lock()
            .iter()
            .filter(|e| e.selector == selector)
            .map(|e| e.handle)
            .collect()
    }

    fn activation_link(&self, element: &ElementHandle) -> Option<LinkHandle> {
        self.elements
            .lock()
            .iter()
            .find(|e| e.handle == *element)
            .and_then(|e| {
                e.href.as_ref().map(|href| LinkHandle {
                    element: e.handle,
                    href: href.clone(),
                })
            })
    }

    fn rendered_height(&self, element: &ElementHandle) -> f64 {
        self.elements
            .lock()
            .iter()
            .find(|e| e.handle == *element)
            .map_or(0.0, |e| e.height)
    }

    fn editable_focused(&self) -> bool {
        self.editable_focused.load(Ordering::SeqCst)
    }
}

/// Records marker/scroll/overlay/toast effects. Marker state models DOM
/// class semantics: marking an already-marked element is idempotent.
#[derive(Clone, Default)]
pub struct MockVisual {
    marked: Arc<Mutex<Vec<ElementHandle>>>,
    scrolls: Arc<Mutex<Vec<ElementHandle>>>,
    help_visible: Arc<AtomicBool>,
    toasts: Arc<Mutex<Vec<String>>>,
}

impl MockVisual {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements currently carrying the marker.
    pub fn marked(&self) -> Vec<ElementHandle> {
        self.marked.lock().clone()
    }

    /// Scroll requests, oldest first.
    pub fn scrolls(&self) -> Vec<ElementHandle> {
        self.scrolls.lock().clone()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible.load(Ordering::SeqCst)
    }

    pub fn toasts(&self) -> Vec<String> {
        self.toasts.lock().clone()
    }
}

impl VisualOps for MockVisual {
    fn mark_current(&self, element: &ElementHandle) {
        let mut marked = self.marked.lock();
        if !marked.contains(element) {
            marked.push(*element);
        }
    }

    fn clear_current(&self, element: &ElementHandle) {
        self.marked.lock().retain(|e| e != element);
    }

    fn scroll_center(&self, element: &ElementHandle) {
        self.scrolls.lock().push(*element);
    }

    fn set_help_visible(&self, visible: bool) {
        self.help_visible.store(visible, Ordering::SeqCst);
    }

    fn toast(&self, text: &str) {
        self.toasts.lock().push(text.to_string());
    }
}

/// Records navigations instead of performing them.
#[derive(Clone, Default)]
pub struct MockNav {
    navigations: Arc<Mutex<Vec<String>>>,
    new_contexts: Arc<Mutex<Vec<String>>>,
}

impl MockNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }

    pub fn new_contexts(&self) -> Vec<String> {
        self.new_contexts.lock().clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.navigations.lock().last().cloned()
    }
}

impl NavOps for MockNav {
    fn navigate(&self, url: &str) {
        self.navigations.lock().push(url.to_string());
    }

    fn open_new_context(&self, url: &str) {
        self.new_contexts.lock().push(url.to_string());
    }
}

/// Records clipboard writes; can be told to fail.
#[derive(Clone, Default)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    pub fn set_fail(&self, v: bool) {
        self.fail.store(v, Ordering::SeqCst);
    }
}

#[async_trait]
impl ClipboardOps for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClipboardError::Denied);
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}
