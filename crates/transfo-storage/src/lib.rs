//! # transfo-storage
//!
//! Row sources for the Transfo Desk contract viewer.
//!
//! The [`RowSource`] trait abstracts where validated rows come from:
//!
//! - [`mysql::MySqlStore`]: the production backend, reading the
//!   `Customers` table through a `sqlx` connection pool
//! - [`memory::MemoryStore`]: a seedable in-memory store for tests
//!
//! All reads are synchronous from the caller's point of view: one query,
//! one transform, one response. There is no write path.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod memory;
pub mod mysql;
pub mod source;

pub use config::DbConfig;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use mysql::MySqlStore;
pub use source::RowSource;
