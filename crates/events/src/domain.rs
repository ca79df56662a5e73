//! Event contracts shared between the order and product modules.
//!
//! Kept as a **closed sum type** so listener dispatch is exhaustive-match,
//! not open-ended dynamic lookup. Adding an event kind forces every
//! listener to say what it does with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use modshop_core::{LineItem, OrderId};

use crate::event::Event;

/// Fact: an order was accepted for processing.
///
/// Published once per `place_order` call; carries the caller's order id and
/// line items unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    pub lines: Vec<LineItem>,
    pub occurred_at: DateTime<Utc>,
}

/// Fact: the requested quantities were reserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReserved {
    pub order_id: OrderId,
    pub occurred_at: DateTime<Utc>,
}

/// Fact: the reservation was declined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReservationFailed {
    pub order_id: OrderId,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

/// Outcome of exactly one reservation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryOutcome {
    Reserved(InventoryReserved),
    Failed(InventoryReservationFailed),
}

impl InventoryOutcome {
    pub fn order_id(&self) -> &OrderId {
        match self {
            InventoryOutcome::Reserved(e) => &e.order_id,
            InventoryOutcome::Failed(e) => &e.order_id,
        }
    }
}

/// All events that flow over the in-process bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    OrderPlaced(OrderPlaced),
    InventoryOutcome(InventoryOutcome),
}

/// Subscription tag: one per `DomainEvent` variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    OrderPlaced,
    InventoryOutcome,
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::OrderPlaced(_) => EventKind::OrderPlaced,
            DomainEvent::InventoryOutcome(_) => EventKind::InventoryOutcome,
        }
    }
}

impl Event for DomainEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::OrderPlaced(_) => "order.placed",
            DomainEvent::InventoryOutcome(InventoryOutcome::Reserved(_)) => "inventory.reserved",
            DomainEvent::InventoryOutcome(InventoryOutcome::Failed(_)) => {
                "inventory.reservation_failed"
            }
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::OrderPlaced(e) => e.occurred_at,
            DomainEvent::InventoryOutcome(InventoryOutcome::Reserved(e)) => e.occurred_at,
            DomainEvent::InventoryOutcome(InventoryOutcome::Failed(e)) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let placed = DomainEvent::OrderPlaced(OrderPlaced {
            order_id: OrderId::new("O-1"),
            lines: Vec::new(),
            occurred_at: Utc::now(),
        });
        assert_eq!(placed.kind(), EventKind::OrderPlaced);
        assert_eq!(placed.event_type(), "order.placed");

        let failed = DomainEvent::InventoryOutcome(InventoryOutcome::Failed(
            InventoryReservationFailed {
                order_id: OrderId::new("O-1"),
                reason: "Insufficient stock".to_owned(),
                occurred_at: Utc::now(),
            },
        ));
        assert_eq!(failed.kind(), EventKind::InventoryOutcome);
        assert_eq!(failed.event_type(), "inventory.reservation_failed");
    }

    #[test]
    fn outcome_exposes_order_id_for_both_cases() {
        let id = OrderId::new("O-9");
        let reserved = InventoryOutcome::Reserved(InventoryReserved {
            order_id: id.clone(),
            occurred_at: Utc::now(),
        });
        assert_eq!(reserved.order_id(), &id);
    }
}
