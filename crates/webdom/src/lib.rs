//! Boundary layer between the navigation core and the host page.
//!
//! The core never touches a real DOM. Everything it needs from the page is
//! expressed as a trait here: [`DomOps`] for reads, [`VisualOps`] for the
//! marker/scroll/overlay side effects, [`NavOps`] for navigation, and
//! [`ClipboardOps`] for the one asynchronous edge. A browser embedding
//! implements these against its platform bindings; the workspace's tests
//! run against the [`mock`] implementations.

mod error;
pub mod mock;
mod ops;

pub use error::ClipboardError;
pub use ops::{ClipboardOps, DomOps, NavOps, VisualOps};

/// Opaque identity of a page element. Stable only within one DOM
/// generation; a rebuild may hand out a fresh handle for the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub u64);

/// An activation target resolved from a result element: the element's own
/// or first descendant link, with its absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHandle {
    /// The link element itself.
    pub element: ElementHandle,
    /// Absolute URL taken from the link's `href`.
    pub href: String,
}
