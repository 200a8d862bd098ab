use thiserror::Error;

/// Error from the asynchronous clipboard boundary.
///
/// Callers are expected to swallow this: a failed copy produces no user
/// visible effect, by contract.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// The page denied clipboard access.
    #[error("clipboard write denied")]
    Denied,
    /// The write failed for any other reason.
    #[error("clipboard write failed: {0}")]
    Other(String),
}
