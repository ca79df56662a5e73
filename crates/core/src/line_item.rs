//! Order line items.

use serde::{Deserialize, Serialize};

use crate::id::Sku;

/// One requested position of an order: which product, how many.
///
/// The quantity is intentionally signed and unvalidated here; whether a
/// non-positive quantity is acceptable is a reservation-policy decision,
/// not a data-model one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(sku: impl Into<String>, quantity: i64) -> Self {
        Self {
            sku: Sku::new(sku),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_matches_wire_contract() {
        let item = LineItem::new("P-1", 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"sku": "P-1", "quantity": 2}));
    }
}
