use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use faraway_core::AggregateId;

use crate::Event;

/// An event plus the stream metadata needed to journal it.
///
/// `sequence_number` is monotonically increasing per aggregate stream,
/// starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    aggregate_id: AggregateId,
    aggregate_type: String,
    sequence_number: u64,
    recorded_at: DateTime<Utc>,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        event_id: Uuid,
        aggregate_id: AggregateId,
        aggregate_type: impl Into<String>,
        sequence_number: u64,
        recorded_at: DateTime<Utc>,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            aggregate_id,
            aggregate_type: aggregate_type.into(),
            sequence_number,
            recorded_at,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn aggregate_id(&self) -> AggregateId {
        self.aggregate_id
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap `payload` with a fresh UUIDv7 event id, stamped now.
    pub fn record(
        aggregate_id: AggregateId,
        aggregate_type: impl Into<String>,
        sequence_number: u64,
        payload: E,
    ) -> Self {
        Self::new(
            Uuid::now_v7(),
            aggregate_id,
            aggregate_type,
            sequence_number,
            Utc::now(),
            payload,
        )
    }

    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}
