//! `modshop-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns)
//! shared by the order and product modules. It is the only thing the two
//! modules may have in common besides the event contracts.

pub mod error;
pub mod id;
pub mod line_item;

pub use error::{DomainError, DomainResult};
pub use id::{OrderId, Sku};
pub use line_item::LineItem;
