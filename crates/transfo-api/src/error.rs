//! Error types for transfo-api.

use thiserror::Error;

/// Result type alias for transfo-api operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in transfo-api.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from transfo-storage.
    #[error("storage error: {0}")]
    Storage(#[from] transfo_storage::Error),

    /// I/O error (binding the listener, serving connections).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
