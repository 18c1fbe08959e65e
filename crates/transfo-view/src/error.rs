//! Error types for transfo-view.

use thiserror::Error;

/// Result type alias for transfo-view operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in transfo-view.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A sort control sent a key the view does not know.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    /// An interaction handler from a previous render was used after the
    /// content it was attached to had been replaced.
    #[error("stale interaction handler (render generation {0})")]
    StaleHandler(u64),
}
