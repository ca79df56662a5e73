//! Composition root: wires the order and product modules over the bus.
//!
//! This is the only crate that may see both modules at once. The two
//! domain crates (`modshop-order`, `modshop-product`) do not depend on each
//! other; cargo's dependency graph enforces that module boundary, and
//! collaboration happens exclusively through published events.

use std::sync::Arc;

use modshop_core::OrderId;
use modshop_events::{EventBus, EventKind};
use modshop_order::{OrderProcessManager, OrderService, OrderStatus, OrderStatusStore};
use modshop_product::{InventoryPolicy, InventoryService};

/// The wired application: place-order command side plus status read side.
pub struct Application {
    bus: Arc<EventBus>,
    order_service: OrderService,
    status_store: Arc<OrderStatusStore>,
}

impl Application {
    /// Wire with the default inventory service (capacity policy, cap 1000).
    pub fn build() -> Self {
        Self::build_with(InventoryService::new())
    }

    /// Dependency injection by construction: everything is an explicit
    /// object, no process-wide singletons.
    pub fn build_with(inventory: InventoryService) -> Self {
        let bus = Arc::new(EventBus::new());
        let status_store = Arc::new(OrderStatusStore::new());
        let process_manager = Arc::new(OrderProcessManager::new(status_store.clone()));

        // Registration order matters within a kind: the process manager
        // records the explicit Pending entry before the policy decides.
        bus.subscribe(EventKind::OrderPlaced, process_manager.clone());
        bus.subscribe(
            EventKind::OrderPlaced,
            Arc::new(InventoryPolicy::new(inventory)),
        );
        bus.subscribe(EventKind::InventoryOutcome, process_manager);

        let order_service = OrderService::new(bus.clone());

        Self {
            bus,
            order_service,
            status_store,
        }
    }

    pub fn order_service(&self) -> &OrderService {
        &self.order_service
    }

    /// Polling read side: `None` means the order id was never submitted.
    pub fn status_of(&self, order_id: &OrderId) -> Option<OrderStatus> {
        self.status_store.status_of(order_id)
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::build()
    }
}
