//! # transfo-core
//!
//! Shared types for the Transfo Desk contract viewer.
//!
//! This crate provides the foundational types used across all Transfo Desk
//! crates. It has no internal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: Stored rows and boundary validation
//! - [`view`]: Computed, request-scoped view entities

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod record;
pub mod view;

pub use error::{Error, Result};
pub use record::{RawRow, Row, parse_power};
pub use view::{Contract, Customer, Transformer};
