use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for an event, carrying bus-level metadata.
///
/// The bus stamps every published event with an identity and a receipt
/// time; listeners receive the envelope, not the bare payload. `event_id`
/// is UUIDv7 (time-ordered), mostly useful for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    recorded_at: DateTime<Utc>,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, recorded_at: DateTime<Utc>, payload: E) -> Self {
        Self {
            event_id,
            recorded_at,
            payload,
        }
    }

    /// Stamp a payload with a fresh identity and the current receipt time.
    pub fn record(payload: E) -> Self {
        Self::new(Uuid::now_v7(), Utc::now(), payload)
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
