//! Error types for transfo-core.

use thiserror::Error;

/// Result type alias for transfo-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in transfo-core.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A stored row is missing a required field, or the field is blank.
    #[error("row rejected: field `{field}` is missing or empty")]
    EmptyField {
        /// Name of the offending column.
        field: &'static str,
    },

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
