//! # transfo-query
//!
//! The aggregation transform for Transfo Desk.
//!
//! Takes flat stored rows `(serial, contract, customer, power)` and
//! reshapes them into the nested Customer → Contract → Transformer view,
//! with counts and power sums computed at each level. Also provides the
//! distinct-value listings that feed the filter dropdown and the
//! contract-count endpoint.
//!
//! Everything here is a pure function of its input rows; view entities are
//! recomputed per request and never cached.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod aggregate;

mod proptests;

pub use aggregate::{aggregate, unique_contract_ids, unique_customers};
