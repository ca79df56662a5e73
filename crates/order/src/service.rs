//! Place-order command API.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use modshop_core::{DomainError, LineItem, OrderId};
use modshop_events::{DomainEvent, EventBus, OrderPlaced, PublishError};

/// Command: PlaceOrder.
///
/// Wire shape (camelCase) matches the inbound JSON contract:
/// `{"orderId": "...", "items": [{"sku": "...", "quantity": N}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    pub order_id: OrderId,
    pub items: Vec<LineItem>,
}

/// Synchronous acknowledgment of a placement.
///
/// References the same order id the caller supplied and says nothing about
/// the reservation outcome; that is only visible via a later status lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementAck {
    pub order_id: OrderId,
}

#[derive(Debug, Error)]
pub enum PlaceOrderError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to publish order placement: {0}")]
    Bus(#[from] PublishError),
}

/// Accepts place-order commands and turns them into `OrderPlaced` events.
///
/// Fire-and-forget from the caller's perspective, but dispatch is inline:
/// every registered listener has run by the time `place_order` returns.
pub struct OrderService {
    bus: Arc<EventBus>,
}

impl OrderService {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }

    pub fn place_order(&self, command: PlaceOrder) -> Result<PlacementAck, PlaceOrderError> {
        if command.order_id.is_empty() {
            return Err(DomainError::validation("order_id must not be empty").into());
        }

        tracing::info!(
            order_id = %command.order_id,
            lines = command.items.len(),
            "placing order"
        );

        let order_id = command.order_id;
        self.bus.publish(DomainEvent::OrderPlaced(OrderPlaced {
            order_id: order_id.clone(),
            lines: command.items,
            occurred_at: Utc::now(),
        }))?;

        Ok(PlacementAck { order_id })
    }
}
