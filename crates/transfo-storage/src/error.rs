//! Error types for transfo-storage.

use thiserror::Error;

/// Result type alias for transfo-storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in transfo-storage.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from transfo-core.
    #[error("core error: {0}")]
    Core(#[from] transfo_core::Error),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// What configuration is problematic.
        message: String,
    },
}
