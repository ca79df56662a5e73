//! Inventory reservation decision (pure, no state, no IO).
//!
//! Policy: **capacity policy**. Every requested quantity must be positive
//! and the batch total must not exceed a fixed capacity. An empty batch is
//! vacuously approvable.

use modshop_core::LineItem;

/// Default maximum total quantity a single reservation batch may claim.
pub const BATCH_CAPACITY: i64 = 1_000;

/// Default rejection reason.
pub const INSUFFICIENT_STOCK: &str = "Insufficient stock";

/// Outcome of exactly one reservation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationDecision {
    Approved,
    Rejected { reason: String },
}

impl ReservationDecision {
    fn insufficient_stock() -> Self {
        ReservationDecision::Rejected {
            reason: INSUFFICIENT_STOCK.to_owned(),
        }
    }
}

/// Decides whether a batch of line items can be reserved.
#[derive(Debug, Clone)]
pub struct InventoryService {
    batch_capacity: i64,
}

impl Default for InventoryService {
    fn default() -> Self {
        Self {
            batch_capacity: BATCH_CAPACITY,
        }
    }
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mainly for tests pinning a different cap.
    pub fn with_batch_capacity(batch_capacity: i64) -> Self {
        Self { batch_capacity }
    }

    pub fn batch_capacity(&self) -> i64 {
        self.batch_capacity
    }

    /// Approve iff every quantity is positive and the batch total fits the
    /// capacity. Totals use checked addition; overflow rejects.
    pub fn reserve(&self, lines: &[LineItem]) -> ReservationDecision {
        if lines.iter().any(|line| line.quantity <= 0) {
            return ReservationDecision::insufficient_stock();
        }

        let total = lines
            .iter()
            .try_fold(0i64, |acc, line| acc.checked_add(line.quantity));

        match total {
            Some(total) if total <= self.batch_capacity => ReservationDecision::Approved,
            _ => ReservationDecision::insufficient_stock(),
        }
    }
}
