//! Stored rows and boundary validation.
//!
//! Storage yields untrusted shapes: any column may be NULL or blank.
//! [`RawRow`] models that shape; [`Row`] is the validated record the rest
//! of the system operates on. Validation rejects rows whose identifying
//! fields (`serial`, `contract`, `customer`) are missing or empty and
//! coerces a missing `power` to the empty string, which later parses to
//! zero.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A stored record exactly as it comes off the wire or out of storage,
/// before any validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Transformer serial number, possibly absent.
    pub serial: Option<String>,
    /// Contract id, possibly absent.
    pub contract: Option<String>,
    /// Customer name, possibly absent.
    pub customer: Option<String>,
    /// Power rating as stored (free text), possibly absent.
    pub power: Option<String>,
}

impl RawRow {
    /// Validate into a [`Row`].
    ///
    /// Rejects the row when `serial`, `contract`, or `customer` is missing
    /// or blank. A missing `power` is coerced to `""` rather than rejected.
    pub fn validate(self) -> Result<Row> {
        let serial = require(self.serial, "serial")?;
        let contract = require(self.contract, "contract")?;
        let customer = require(self.customer, "customer")?;
        Ok(Row {
            serial,
            contract,
            customer,
            power: self.power.unwrap_or_default(),
        })
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::EmptyField { field }),
    }
}

/// One validated transformer-sale record.
///
/// `power` stays as stored text; parsing happens during aggregation so a
/// malformed value can degrade to zero instead of failing the whole read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Transformer serial number.
    pub serial: String,
    /// Contract id this sale belongs to.
    pub contract: String,
    /// Customer the contract was signed with.
    pub customer: String,
    /// Power rating as stored (free text).
    pub power: String,
}

impl Row {
    /// Convenience constructor, mainly for tests and seeded stores.
    pub fn new(
        serial: impl Into<String>,
        contract: impl Into<String>,
        customer: impl Into<String>,
        power: impl Into<String>,
    ) -> Self {
        Self {
            serial: serial.into(),
            contract: contract.into(),
            customer: customer.into(),
            power: power.into(),
        }
    }
}

/// Parse a stored power value.
///
/// Returns `None` when the text is not a finite number. Callers decide the
/// fallback policy (aggregation substitutes zero and logs a data-quality
/// warning).
pub fn parse_power(raw: &str) -> Option<f64> {
    let parsed: f64 = raw.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}
