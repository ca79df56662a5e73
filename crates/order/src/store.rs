//! In-memory order status store (read model).
//!
//! Process-lifetime only; contents are lost on restart. The store is the
//! shared mutable state of this module, so access goes through an `RwLock`
//! (the original environment left synchronization unspecified; here it is
//! explicit). Writes come exclusively from the
//! [`crate::process::OrderProcessManager`]; reads come from external
//! pollers.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use modshop_core::OrderId;

use crate::status::OrderStatus;

#[derive(Debug, Default)]
pub struct OrderStatusStore {
    statuses: RwLock<HashMap<OrderId, OrderStatus>>,
}

impl OrderStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional overwrite: the store reflects the most recent status
    /// written, with no transition checks (last write wins).
    pub fn update_status(&self, order_id: OrderId, status: OrderStatus) {
        // A poisoned lock only means a writer panicked mid-insert; the map
        // itself is still a usable snapshot.
        let mut statuses = self
            .statuses
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        statuses.insert(order_id, status);
    }

    /// Current status, or `None` for an order id never written — absence
    /// is a normal answer, not an error.
    pub fn status_of(&self, order_id: &OrderId) -> Option<OrderStatus> {
        let statuses = self.statuses.read().unwrap_or_else(PoisonError::into_inner);
        statuses.get(order_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_order_reads_as_none() {
        let store = OrderStatusStore::new();
        assert_eq!(store.status_of(&OrderId::new("O-404")), None);
    }

    #[test]
    fn update_overwrites_unconditionally() {
        let store = OrderStatusStore::new();
        let id = OrderId::new("O-1");

        store.update_status(id.clone(), OrderStatus::ReadyToShip);
        assert_eq!(store.status_of(&id), Some(OrderStatus::ReadyToShip));

        // Even a terminal status gives way to the next write.
        store.update_status(id.clone(), OrderStatus::cancelled("Insufficient stock"));
        assert_eq!(
            store.status_of(&id),
            Some(OrderStatus::cancelled("Insufficient stock"))
        );
    }

    #[test]
    fn orders_are_tracked_independently() {
        let store = OrderStatusStore::new();
        store.update_status(OrderId::new("O-1"), OrderStatus::ReadyToShip);
        store.update_status(OrderId::new("O-2"), OrderStatus::Pending);

        assert_eq!(
            store.status_of(&OrderId::new("O-1")),
            Some(OrderStatus::ReadyToShip)
        );
        assert_eq!(
            store.status_of(&OrderId::new("O-2")),
            Some(OrderStatus::Pending)
        );
    }
}
