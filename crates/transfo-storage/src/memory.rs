//! Seedable in-memory row source, for tests.

use async_trait::async_trait;
use transfo_core::Row;

use crate::error::Result;
use crate::source::RowSource;

/// An in-memory [`RowSource`] seeded with a fixed set of rows.
///
/// Mirrors the ordering guarantees of the MySQL backend so the layers
/// above can be exercised without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Row>,
    healthy: bool,
}

impl MemoryStore {
    /// Create a healthy store seeded with `rows`.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows, healthy: true }
    }

    /// Create a store whose `ping` reports unreachable and whose reads
    /// fail, for exercising error envelopes.
    pub fn unreachable() -> Self {
        Self {
            rows: Vec::new(),
            healthy: false,
        }
    }

    fn check(&self) -> Result<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(sqlx::Error::PoolClosed.into())
        }
    }
}

#[async_trait]
impl RowSource for MemoryStore {
    async fn fetch_rows(&self) -> Result<Vec<Row>> {
        self.check()?;
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| (&a.customer, &a.serial).cmp(&(&b.customer, &b.serial)));
        Ok(rows)
    }

    async fn fetch_rows_for_customer(&self, customer: &str) -> Result<Vec<Row>> {
        self.check()?;
        let mut rows: Vec<Row> = self
            .rows
            .iter()
            .filter(|r| r.customer == customer)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (&a.contract, &a.serial).cmp(&(&b.contract, &b.serial)));
        Ok(rows)
    }

    async fn count_rows(&self) -> Result<u64> {
        self.check()?;
        Ok(self.rows.len() as u64)
    }

    async fn ping(&self) -> bool {
        self.healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryStore {
        MemoryStore::new(vec![
            Row::new("S2", "C1", "Zenith", "1"),
            Row::new("S1", "C2", "Acme", "2"),
            Row::new("S3", "C1", "Zenith", "3"),
        ])
    }

    #[tokio::test]
    async fn fetch_rows_orders_by_customer_then_serial() {
        let rows = seeded().fetch_rows().await.unwrap();
        let keys: Vec<_> = rows.iter().map(|r| (r.customer.as_str(), r.serial.as_str())).collect();
        assert_eq!(keys, vec![("Acme", "S1"), ("Zenith", "S2"), ("Zenith", "S3")]);
    }

    #[tokio::test]
    async fn fetch_rows_for_customer_filters_exactly() {
        let rows = seeded().fetch_rows_for_customer("Zenith").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.customer == "Zenith"));

        let none = seeded().fetch_rows_for_customer("Nobody").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn unreachable_store_fails_reads_and_ping() {
        let store = MemoryStore::unreachable();
        assert!(!store.ping().await);
        assert!(store.fetch_rows().await.is_err());
        assert!(store.count_rows().await.is_err());
    }
}
