//! Configuration types for navki.
//!
//! Two concerns live here:
//! - [`Site`]: the closed set of supported sites, each carrying the
//!   immutable [`SiteProfile`] selector set used to locate results and
//!   pagination controls on its pages.
//! - [`Timeouts`]: expiry windows for the interpreter's pending count and
//!   pending chord state.
//!
//! Everything is plain data. Selection happens once, at page-context
//! construction; the core never mutates a profile afterwards.

mod error;
mod site;
mod timeouts;

pub use error::UnknownSite;
pub use site::{Site, SiteProfile};
pub use timeouts::Timeouts;
