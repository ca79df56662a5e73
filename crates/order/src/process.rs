//! Order process manager: sole writer of the status store.
//!
//! Subscribed for both `OrderPlaced` (records the explicit `Pending` entry)
//! and `InventoryOutcome` (records the terminal status). Keeping the
//! pending write here, rather than in `OrderService`, preserves a single
//! writer for the store.

use std::sync::Arc;

use modshop_core::DomainResult;
use modshop_events::{DomainEvent, EventEnvelope, EventListener, InventoryOutcome};

use crate::status::OrderStatus;
use crate::store::OrderStatusStore;

pub struct OrderProcessManager {
    store: Arc<OrderStatusStore>,
}

impl OrderProcessManager {
    pub fn new(store: Arc<OrderStatusStore>) -> Self {
        Self { store }
    }
}

impl EventListener for OrderProcessManager {
    fn handle(&self, envelope: &EventEnvelope<DomainEvent>) -> DomainResult<Vec<DomainEvent>> {
        match envelope.payload() {
            DomainEvent::OrderPlaced(e) => {
                tracing::info!(order_id = %e.order_id, "order pending reservation");
                self.store
                    .update_status(e.order_id.clone(), OrderStatus::Pending);
            }
            DomainEvent::InventoryOutcome(InventoryOutcome::Reserved(e)) => {
                tracing::info!(order_id = %e.order_id, "order ready to ship");
                self.store
                    .update_status(e.order_id.clone(), OrderStatus::ReadyToShip);
            }
            DomainEvent::InventoryOutcome(InventoryOutcome::Failed(e)) => {
                tracing::info!(order_id = %e.order_id, reason = %e.reason, "order cancelled");
                self.store
                    .update_status(e.order_id.clone(), OrderStatus::cancelled(e.reason.clone()));
            }
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use modshop_core::OrderId;
    use modshop_events::{InventoryReservationFailed, InventoryReserved, OrderPlaced};

    use super::*;

    fn manager() -> (OrderProcessManager, Arc<OrderStatusStore>) {
        let store = Arc::new(OrderStatusStore::new());
        (OrderProcessManager::new(store.clone()), store)
    }

    fn deliver(manager: &OrderProcessManager, event: DomainEvent) {
        manager
            .handle(&EventEnvelope::record(event))
            .expect("process manager never fails");
    }

    #[test]
    fn placement_records_pending() {
        let (manager, store) = manager();
        deliver(
            &manager,
            DomainEvent::OrderPlaced(OrderPlaced {
                order_id: OrderId::new("O-1"),
                lines: Vec::new(),
                occurred_at: Utc::now(),
            }),
        );
        assert_eq!(
            store.status_of(&OrderId::new("O-1")),
            Some(OrderStatus::Pending)
        );
    }

    #[test]
    fn reserved_outcome_records_ready_to_ship() {
        let (manager, store) = manager();
        deliver(
            &manager,
            DomainEvent::InventoryOutcome(InventoryOutcome::Reserved(InventoryReserved {
                order_id: OrderId::new("O-1"),
                occurred_at: Utc::now(),
            })),
        );
        assert_eq!(
            store.status_of(&OrderId::new("O-1")),
            Some(OrderStatus::ReadyToShip)
        );
    }

    #[test]
    fn failed_outcome_records_cancellation_with_reason() {
        let (manager, store) = manager();
        deliver(
            &manager,
            DomainEvent::InventoryOutcome(InventoryOutcome::Failed(InventoryReservationFailed {
                order_id: OrderId::new("O-2"),
                reason: "Insufficient stock".to_owned(),
                occurred_at: Utc::now(),
            })),
        );
        assert_eq!(
            store.status_of(&OrderId::new("O-2")),
            Some(OrderStatus::cancelled("Insufficient stock"))
        );
    }

    #[test]
    fn process_manager_emits_no_follow_ups() {
        let (manager, _store) = manager();
        let follow_ups = manager
            .handle(&EventEnvelope::record(DomainEvent::InventoryOutcome(
                InventoryOutcome::Reserved(InventoryReserved {
                    order_id: OrderId::new("O-1"),
                    occurred_at: Utc::now(),
                }),
            )))
            .unwrap();
        assert!(follow_ups.is_empty());
    }
}
