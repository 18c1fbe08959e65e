//! # transfo-api
//!
//! HTTP read endpoints for the Transfo Desk contract viewer.
//!
//! Every endpoint is an idempotent read: one storage query, one transform,
//! one JSON envelope of shape `{success, data-or-error}`. Storage being
//! unreachable surfaces as a failure envelope (and through `/api/health`),
//! never as a process abort.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;
pub mod server;

pub use error::{Error, Result};
pub use routes::{AppState, router};
pub use server::Server;
