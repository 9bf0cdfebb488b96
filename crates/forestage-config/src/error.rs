//! Error types for the config crate.

use thiserror::Error;

/// Errors that can occur when preparing values for inline embedding.
#[derive(Debug, Error)]
pub enum EscapeError {
    /// The value cannot be represented as JSON (non-string map keys,
    /// non-finite floats behind a custom Serialize, and the like).
    #[error("value cannot be JSON-encoded: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for escaping operations.
pub type Result<T> = std::result::Result<T, EscapeError>;
