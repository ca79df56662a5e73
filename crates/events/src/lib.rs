//! Domain events and in-process pub/sub mechanics.
//!
//! The order and product modules never call each other; they collaborate
//! exclusively through the event contracts in [`domain`] routed over the
//! [`bus::EventBus`]. This crate is therefore the only shared surface
//! between the two modules besides `modshop-core`.

pub mod bus;
pub mod domain;
pub mod envelope;
pub mod event;

pub use bus::{EventBus, EventListener, PublishError};
pub use domain::{
    DomainEvent, EventKind, InventoryOutcome, InventoryReservationFailed, InventoryReserved,
    OrderPlaced,
};
pub use envelope::EventEnvelope;
pub use event::Event;
