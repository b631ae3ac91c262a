//! Error types for catalog access and the repair loop.

use thiserror::Error;

/// Errors that can occur while talking to the catalog or repairing a
/// record.
#[derive(Debug, Error)]
pub enum RepairError {
    /// The catalog returned a non-success HTTP status.
    #[error("HTTP error from catalog: {message}")]
    Http { message: String },

    /// A catalog response could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// An error propagated from a core transform.
    #[error(transparent)]
    Transform(#[from] colophon_core::Error),
}

/// Convenience alias for repair results.
pub type RepairResult<T> = std::result::Result<T, RepairError>;
