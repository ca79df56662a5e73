//! Product module: inventory reservation.
//!
//! This crate never depends on the order module. It learns about placed
//! orders from `OrderPlaced` events and answers with `InventoryOutcome`
//! events; the reservation decision itself is a pure function.

pub mod inventory;
pub mod policy;

pub use inventory::{BATCH_CAPACITY, INSUFFICIENT_STOCK, InventoryService, ReservationDecision};
pub use policy::InventoryPolicy;
