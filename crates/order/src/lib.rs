//! Order module: command API, status tracking, process manager.
//!
//! This crate never depends on the product module; the inventory outcome
//! reaches it as an event over the bus. Placing an order is acknowledged
//! immediately, the reservation outcome becomes visible later through
//! [`store::OrderStatusStore::status_of`] (eventual consistency).

pub mod process;
pub mod service;
pub mod status;
pub mod store;

pub use process::OrderProcessManager;
pub use service::{OrderService, PlaceOrder, PlaceOrderError, PlacementAck};
pub use status::OrderStatus;
pub use store::OrderStatusStore;
