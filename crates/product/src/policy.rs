//! Inventory policy: reacts to placed orders with a reservation outcome.

use chrono::Utc;

use modshop_core::DomainResult;
use modshop_events::{
    DomainEvent, EventEnvelope, EventListener, InventoryOutcome, InventoryReservationFailed,
    InventoryReserved,
};

use crate::inventory::{InventoryService, ReservationDecision};

/// Listener on `OrderPlaced`.
///
/// One synchronous decision per event, no retries: delegate to
/// [`InventoryService::reserve`] and answer with exactly one
/// `InventoryOutcome` follow-up event.
pub struct InventoryPolicy {
    service: InventoryService,
}

impl InventoryPolicy {
    pub fn new(service: InventoryService) -> Self {
        Self { service }
    }
}

impl EventListener for InventoryPolicy {
    fn handle(&self, envelope: &EventEnvelope<DomainEvent>) -> DomainResult<Vec<DomainEvent>> {
        let placed = match envelope.payload() {
            DomainEvent::OrderPlaced(e) => e,
            // Only subscribed for OrderPlaced; anything else is not ours.
            DomainEvent::InventoryOutcome(_) => return Ok(Vec::new()),
        };

        let outcome = match self.service.reserve(&placed.lines) {
            ReservationDecision::Approved => {
                tracing::info!(order_id = %placed.order_id, "reservation approved");
                InventoryOutcome::Reserved(InventoryReserved {
                    order_id: placed.order_id.clone(),
                    occurred_at: Utc::now(),
                })
            }
            ReservationDecision::Rejected { reason } => {
                tracing::info!(order_id = %placed.order_id, %reason, "reservation rejected");
                InventoryOutcome::Failed(InventoryReservationFailed {
                    order_id: placed.order_id.clone(),
                    reason,
                    occurred_at: Utc::now(),
                })
            }
        };

        Ok(vec![DomainEvent::InventoryOutcome(outcome)])
    }
}
