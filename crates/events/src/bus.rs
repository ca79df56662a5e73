//! In-process event bus (typed pub/sub, synchronous dispatch).
//!
//! The bus is a **constructed object**, not a process-wide singleton:
//! components hold it via `Arc`, which keeps unit tests free to wire their
//! own isolated instances.
//!
//! Dispatch contract:
//! - delivery is synchronous, in the same logical call stack as `publish`
//! - a listener only sees events of the exact kind it subscribed for
//! - listeners for one kind run in registration order
//! - follow-up events returned by listeners are queued and dispatched after
//!   delivery of the triggering event completes, still inside the same
//!   `publish` call
//! - a listener that errors or panics is logged and skipped; siblings and
//!   the publisher are unaffected

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use modshop_core::DomainResult;

use crate::domain::{DomainEvent, EventKind};
use crate::envelope::EventEnvelope;
use crate::event::Event;

#[derive(Debug, Error)]
pub enum PublishError {
    /// Publish failed due to internal lock poisoning.
    #[error("event bus registrations lock poisoned")]
    Poisoned,
}

/// A handler registered for exactly one event kind.
///
/// Handlers run inline during `publish`. Instead of publishing from inside
/// a handler (which would re-enter the bus), a handler returns its
/// follow-up events and the bus dispatches them.
pub trait EventListener: Send + Sync {
    fn handle(&self, envelope: &EventEnvelope<DomainEvent>) -> DomainResult<Vec<DomainEvent>>;
}

struct Registration {
    kind: EventKind,
    listener: Arc<dyn EventListener>,
}

/// In-process pub/sub bus for [`DomainEvent`]s.
///
/// - No IO / no async
/// - No persistence of past events, no unsubscribe
/// - Shared mutable listener list behind an `RwLock`; registrations are
///   expected at wiring time, publishes afterwards
pub struct EventBus {
    registrations: RwLock<Vec<Registration>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for events of exactly `kind`.
    ///
    /// A listener interested in several kinds subscribes once per kind.
    pub fn subscribe(&self, kind: EventKind, listener: Arc<dyn EventListener>) {
        // Ignore poisoning here, like a subscription onto a wedged bus:
        // the registration is simply lost.
        if let Ok(mut regs) = self.registrations.write() {
            regs.push(Registration { kind, listener });
        }
    }

    /// Deliver `event` (and any cascading follow-ups) to all matching
    /// listeners before returning.
    pub fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let envelope = EventEnvelope::record(event);

            // Snapshot matching listeners so no lock is held while handlers
            // run (a handler could otherwise deadlock a subscriber).
            let listeners: Vec<Arc<dyn EventListener>> = {
                let regs = self
                    .registrations
                    .read()
                    .map_err(|_| PublishError::Poisoned)?;
                regs.iter()
                    .filter(|r| r.kind == envelope.payload().kind())
                    .map(|r| Arc::clone(&r.listener))
                    .collect()
            };

            tracing::debug!(
                event_type = envelope.payload().event_type(),
                event_id = %envelope.event_id(),
                listeners = listeners.len(),
                "dispatching event"
            );

            for listener in listeners {
                match panic::catch_unwind(AssertUnwindSafe(|| listener.handle(&envelope))) {
                    Ok(Ok(follow_ups)) => queue.extend(follow_ups),
                    Ok(Err(err)) => {
                        tracing::error!(
                            event_type = envelope.payload().event_type(),
                            event_id = %envelope.event_id(),
                            error = %err,
                            "listener failed; continuing with remaining listeners"
                        );
                    }
                    Err(_) => {
                        tracing::error!(
                            event_type = envelope.payload().event_type(),
                            event_id = %envelope.event_id(),
                            "listener panicked; continuing with remaining listeners"
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self {
            registrations: RwLock::new(Vec::new()),
        }
    }
}
