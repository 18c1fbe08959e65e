//! MySQL-backed row source.
//!
//! Reads the `Customers` table. Rows with a missing or blank `serial`,
//! `contract`, or `customer` are filtered out in SQL, matching the view
//! the rest of the system expects; boundary validation runs again on what
//! comes back so a schema drift cannot smuggle bad rows upward.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use transfo_core::{RawRow, Row};

use crate::config::DbConfig;
use crate::error::Result;
use crate::source::RowSource;

/// SQL predicate shared by every read: only rows whose identifying fields
/// are present and non-empty count as valid.
const VALID_ROW: &str = "customer IS NOT NULL AND customer != '' \
     AND contract IS NOT NULL AND contract != '' \
     AND serial IS NOT NULL AND serial != ''";

/// A [`RowSource`] backed by a `sqlx` MySQL pool.
#[derive(Clone, Debug)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Wrap an existing pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Open a lazy pool from `config` and wrap it.
    pub fn connect(config: &DbConfig) -> Result<Self> {
        Ok(Self::new(config.connect_lazy()?))
    }

    fn validate(raw: Vec<RawRow>) -> Vec<Row> {
        raw.into_iter()
            .filter_map(|r| match r.validate() {
                Ok(row) => Some(row),
                Err(err) => {
                    tracing::warn!(%err, "dropping invalid row at storage boundary");
                    None
                }
            })
            .collect()
    }
}

type WireRow = (Option<String>, Option<String>, Option<String>, Option<String>);

fn into_raw(rows: Vec<WireRow>) -> Vec<RawRow> {
    rows.into_iter()
        .map(|(serial, contract, customer, power)| RawRow {
            serial,
            contract,
            customer,
            power,
        })
        .collect()
}

#[async_trait]
impl RowSource for MySqlStore {
    async fn fetch_rows(&self) -> Result<Vec<Row>> {
        let query = format!(
            "SELECT serial, contract, customer, power FROM Customers \
             WHERE {VALID_ROW} ORDER BY customer, serial"
        );
        let rows: Vec<WireRow> = sqlx::query_as(&query).fetch_all(&self.pool).await?;
        Ok(Self::validate(into_raw(rows)))
    }

    async fn fetch_rows_for_customer(&self, customer: &str) -> Result<Vec<Row>> {
        let query = format!(
            "SELECT serial, contract, customer, power FROM Customers \
             WHERE customer = ? AND {VALID_ROW} ORDER BY contract, serial"
        );
        let rows: Vec<WireRow> = sqlx::query_as(&query)
            .bind(customer)
            .fetch_all(&self.pool)
            .await?;
        Ok(Self::validate(into_raw(rows)))
    }

    async fn count_rows(&self) -> Result<u64> {
        let query = format!("SELECT COUNT(*) FROM Customers WHERE {VALID_ROW}");
        let count: i64 = sqlx::query_scalar(&query).fetch_one(&self.pool).await?;
        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(%err, "database health probe failed");
                false
            }
        }
    }
}
