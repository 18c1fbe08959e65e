//! Grouping of flat rows into nested customer views.

use std::collections::HashMap;

use transfo_core::{Contract, Customer, Row, Transformer, parse_power};

/// Group rows by customer, then by contract within each customer.
///
/// Grouping preserves first-seen order while accumulating; the finished
/// list is then sorted by customer name, with each customer's contracts
/// sorted by contract id. Callers wanting a different ordering re-sort the
/// result themselves.
///
/// A `power` value that does not parse as a finite number contributes `0`
/// to every sum and is logged as a data-quality warning. It never aborts
/// the aggregation.
pub fn aggregate(rows: &[Row]) -> Vec<Customer> {
    let mut customers: Vec<Customer> = Vec::new();
    let mut customer_index: HashMap<String, usize> = HashMap::new();
    // (customer, contract) -> position in that customer's contract list
    let mut contract_index: HashMap<(String, String), usize> = HashMap::new();

    for row in rows {
        let power = parse_power(&row.power).unwrap_or_else(|| {
            tracing::warn!(
                serial = %row.serial,
                contract = %row.contract,
                power = %row.power,
                "unparseable power value, counting as 0"
            );
            0.0
        });

        let ci = *customer_index
            .entry(row.customer.clone())
            .or_insert_with(|| {
                customers.push(Customer {
                    customer: row.customer.clone(),
                    unique_contracts: 0,
                    total_transformers: 0,
                    total_power: 0.0,
                    contracts: Vec::new(),
                });
                customers.len() - 1
            });
        let customer = &mut customers[ci];

        let key = (row.customer.clone(), row.contract.clone());
        let ki = *contract_index.entry(key).or_insert_with(|| {
            customer.contracts.push(Contract {
                contract: row.contract.clone(),
                transformer_count: 0,
                total_power: 0.0,
                transformers: Vec::new(),
            });
            customer.contracts.len() - 1
        });
        let contract = &mut customer.contracts[ki];

        contract.transformers.push(Transformer {
            serial: row.serial.clone(),
            power,
        });
        contract.transformer_count += 1;
        contract.total_power += power;

        customer.total_transformers += 1;
        customer.total_power += power;
    }

    for customer in &mut customers {
        customer.unique_contracts = customer.contracts.len();
        customer.contracts.sort_by(|a, b| a.contract.cmp(&b.contract));
    }
    customers.sort_by(|a, b| a.customer.cmp(&b.customer));

    customers
}

/// Distinct customer names, sorted. Feeds the customer filter dropdown.
pub fn unique_customers(rows: &[Row]) -> Vec<String> {
    distinct(rows.iter().map(|r| r.customer.as_str()))
}

/// Distinct contract ids, sorted. Feeds the total-contract count.
pub fn unique_contract_ids(rows: &[Row]) -> Vec<String> {
    distinct(rows.iter().map(|r| r.contract.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values.map(str::to_string).collect();
    out.sort();
    out.dedup();
    out
}
