use serde::{Deserialize, Serialize};

/// Order status lifecycle.
///
/// `Pending` is written when the placement is accepted; `ReadyToShip` and
/// `Cancelled` are terminal for a single placement flow. A repeated
/// placement for the same order id restarts the flow, so the store always
/// reflects the most recent outcome processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    ReadyToShip,
    Cancelled { reason: String },
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }

    pub fn cancelled(reason: impl Into<String>) -> Self {
        OrderStatus::Cancelled {
            reason: reason.into(),
        }
    }
}
