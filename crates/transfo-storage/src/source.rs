//! The row source abstraction.

use async_trait::async_trait;
use transfo_core::Row;

use crate::error::Result;

/// Where validated rows come from.
///
/// Implementations are read-only. Each call performs one logical read; no
/// state is shared between calls beyond the backend's own connection pool.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// All valid rows, ordered by `(customer, serial)`.
    async fn fetch_rows(&self) -> Result<Vec<Row>>;

    /// All valid rows for one customer (exact name match), ordered by
    /// `(contract, serial)`. An unknown customer yields an empty list.
    async fn fetch_rows_for_customer(&self, customer: &str) -> Result<Vec<Row>>;

    /// Number of valid rows.
    async fn count_rows(&self) -> Result<u64>;

    /// Health probe: `true` when the backend can be reached.
    async fn ping(&self) -> bool;
}
