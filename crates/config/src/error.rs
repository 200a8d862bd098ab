use thiserror::Error;

/// Error returned when a site name cannot be resolved to a [`crate::Site`].
#[derive(Debug, Clone, Error)]
#[error("unknown site '{name}' (expected one of: google_search, youtube)")]
pub struct UnknownSite {
    /// The name that failed to resolve.
    pub name: String,
}
