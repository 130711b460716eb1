/// A fact produced by an aggregate.
///
/// Events are immutable and carry a stable name plus a schema version so a
/// journal stays readable when payloads evolve. Timestamps live on the
/// [`EventEnvelope`](crate::EventEnvelope), keeping payloads pure data.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "packing.item.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;
}
