//! Error types for trellis-io.

use thiserror::Error;

/// Result type for trellis-io operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors at the boundary with the external design source and output sink.
///
/// Upstream failures are surfaced verbatim with context and never retried
/// here; a missing node is an explicit per-request failure that batch
/// operations record and skip rather than abort on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote design source failed or rejected the request.
    #[error("design source error while {context}: {message}")]
    Upstream { context: String, message: String },

    /// The response payload had an unrecognized shape.
    #[error("unrecognized design payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A requested node id was absent from the fetch result.
    #[error("node {id} not present in fetch result")]
    MissingNode { id: String },

    /// I/O error while persisting generated output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Wrap an upstream failure with the operation it interrupted.
    pub fn upstream(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            context: context.into(),
            message: message.into(),
        }
    }
}
