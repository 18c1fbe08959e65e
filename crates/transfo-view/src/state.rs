//! View state: the current search text, customer filter, and sort key.

use std::cmp::Ordering;
use std::str::FromStr;

use transfo_core::Customer;

use crate::error::Error;

/// Keys the customer list can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Customer name, case-insensitive.
    #[default]
    Customer,
    /// Number of distinct contracts.
    UniqueContracts,
    /// Number of transformers across all contracts.
    TotalTransformers,
    /// Total power across all contracts.
    TotalPower,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "unique_contracts" => Ok(Self::UniqueContracts),
            "total_transformers" => Ok(Self::TotalTransformers),
            "total_power" => Ok(Self::TotalPower),
            other => Err(Error::UnknownSortKey(other.to_string())),
        }
    }
}

impl SortKey {
    fn compare(self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            Self::Customer => a
                .customer
                .to_lowercase()
                .cmp(&b.customer.to_lowercase()),
            Self::UniqueContracts => a.unique_contracts.cmp(&b.unique_contracts),
            Self::TotalTransformers => a.total_transformers.cmp(&b.total_transformers),
            Self::TotalPower => a.total_power.total_cmp(&b.total_power),
        }
    }
}

/// Everything the UI controls can change, as one explicit value.
///
/// [`ViewState::apply`] always starts from the full aggregated list, so
/// changing one control never stacks on top of a previously filtered
/// subset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Free-text search; `None` or empty means no search.
    pub search: Option<String>,
    /// Selected customer (exact name); `None` means all customers.
    pub customer: Option<String>,
    /// Sort key; `None` keeps the incoming order.
    pub sort: Option<SortKey>,
}

impl ViewState {
    /// Apply the customer filter, then the search, then the sort, to the
    /// full unfiltered customer list.
    ///
    /// The sort is ascending and stable: entries that compare equal keep
    /// the order they arrived in.
    pub fn apply(&self, all: &[Customer]) -> Vec<Customer> {
        let mut out: Vec<Customer> = all
            .iter()
            .filter(|c| self.customer.as_deref().is_none_or(|name| c.customer == name))
            .filter(|c| match self.search.as_deref() {
                Some(q) if !q.trim().is_empty() => matches_search(c, q),
                _ => true,
            })
            .cloned()
            .collect();

        if let Some(key) = self.sort {
            // Vec::sort_by is stable, which the tie-break contract relies on.
            out.sort_by(|a, b| key.compare(a, b));
        }
        out
    }
}

/// Case-insensitive substring match against the customer name or any
/// nested contract id, transformer serial, or power rendered as text.
fn matches_search(customer: &Customer, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if customer.customer.to_lowercase().contains(&q) {
        return true;
    }
    customer.contracts.iter().any(|contract| {
        contract.contract.to_lowercase().contains(&q)
            || contract.transformers.iter().any(|t| {
                t.serial.to_lowercase().contains(&q) || t.power.to_string().contains(&q)
            })
    })
}
