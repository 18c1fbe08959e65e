//! Computed view entities.
//!
//! These are produced fresh on every read by the aggregation in
//! `transfo-query` and serialized straight onto the wire. Field names
//! match the JSON the presentation layer consumes. Nothing here is
//! persisted.

use serde::{Deserialize, Serialize};

/// One transformer under a contract. One per stored row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transformer {
    /// Transformer serial number.
    pub serial: String,
    /// Parsed power rating; malformed stored values appear as `0`.
    pub power: f64,
}

/// All transformers sold under one `(customer, contract)` pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Contract id.
    pub contract: String,
    /// Number of transformers under this contract.
    pub transformer_count: usize,
    /// Sum of transformer powers under this contract.
    pub total_power: f64,
    /// The transformers themselves, in row order.
    pub transformers: Vec<Transformer>,
}

/// A customer with every contract grouped beneath it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer name.
    pub customer: String,
    /// Number of distinct contracts for this customer.
    pub unique_contracts: usize,
    /// Number of transformers across all contracts.
    pub total_transformers: usize,
    /// Sum of transformer powers across all contracts.
    pub total_power: f64,
    /// The contracts themselves.
    pub contracts: Vec<Contract>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_serializes_with_wire_field_names() {
        let customer = Customer {
            customer: "Acme".to_string(),
            unique_contracts: 1,
            total_transformers: 1,
            total_power: 10.0,
            contracts: vec![Contract {
                contract: "C1".to_string(),
                transformer_count: 1,
                total_power: 10.0,
                transformers: vec![Transformer {
                    serial: "S1".to_string(),
                    power: 10.0,
                }],
            }],
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["customer"], "Acme");
        assert_eq!(json["unique_contracts"], 1);
        assert_eq!(json["contracts"][0]["contract"], "C1");
        assert_eq!(json["contracts"][0]["transformers"][0]["serial"], "S1");
        assert_eq!(json["contracts"][0]["transformers"][0]["power"], 10.0);
    }
}
