//! Property-based tests for the aggregation invariants.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::aggregate::{aggregate, unique_customers};
    use proptest::prelude::*;
    use transfo_core::Row;

    fn arb_row() -> impl Strategy<Value = Row> {
        (
            "[A-Z][0-9]{1,3}",
            prop::sample::select(vec!["C1", "C2", "C3", "C4"]),
            prop::sample::select(vec!["Acme", "Zenith", "Borealis"]),
            prop_oneof![
                (0u32..10_000).prop_map(|n| n.to_string()),
                Just("bad".to_string()),
                Just("".to_string()),
            ],
        )
            .prop_map(|(serial, contract, customer, power)| {
                Row::new(serial, contract, customer, power)
            })
    }

    proptest! {
        #[test]
        fn contract_power_sums_to_customer_power(rows in prop::collection::vec(arb_row(), 0..64)) {
            for customer in aggregate(&rows) {
                let rolled: f64 = customer.contracts.iter().map(|c| c.total_power).sum();
                prop_assert!((rolled - customer.total_power).abs() < 1e-6);
            }
        }

        #[test]
        fn unique_contracts_matches_distinct_children(rows in prop::collection::vec(arb_row(), 0..64)) {
            for customer in aggregate(&rows) {
                prop_assert_eq!(customer.unique_contracts, customer.contracts.len());
                let mut ids: Vec<_> = customer.contracts.iter().map(|c| c.contract.clone()).collect();
                ids.dedup();
                prop_assert_eq!(ids.len(), customer.unique_contracts);
            }
        }

        #[test]
        fn grouping_is_a_partition(rows in prop::collection::vec(arb_row(), 0..64)) {
            let customers = aggregate(&rows);
            let placed: usize = customers
                .iter()
                .flat_map(|c| c.contracts.iter())
                .map(|c| c.transformers.len())
                .sum();
            prop_assert_eq!(placed, rows.len());

            let counted: usize = customers.iter().map(|c| c.total_transformers).sum();
            prop_assert_eq!(counted, rows.len());
        }

        #[test]
        fn every_input_customer_appears_once(rows in prop::collection::vec(arb_row(), 0..64)) {
            let customers = aggregate(&rows);
            let names: Vec<_> = customers.iter().map(|c| c.customer.clone()).collect();
            prop_assert_eq!(names, unique_customers(&rows));
        }
    }
}
