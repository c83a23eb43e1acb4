//! Error types for artic.
//!
//! Every internal failure surfaces as a single opaque error kind carrying
//! the underlying message; heuristic misfires never escalate to errors.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be processed into an article.
    #[error("unparseable document: {0}")]
    Unparseable(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
