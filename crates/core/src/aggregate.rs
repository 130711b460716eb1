//! Aggregate traits: a consistency boundary that turns commands into events.

/// Identity and version of an aggregate.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Number of events applied so far.
    fn version(&self) -> u64;
}

/// Decide/evolve split for aggregate state.
///
/// - `handle(&self, cmd)` decides which events a command produces and never
///   mutates state.
/// - `apply(&mut self, event)` is the only place state changes.
///
/// Neither side performs IO. A command that has nothing to change decides to
/// an empty event list rather than an error.
pub trait Aggregate: AggregateRoot {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Evolve state from one event. Implementations bump `version()` by one.
    fn apply(&mut self, event: &Self::Event);

    /// Decide the events for `command` against the current state.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;
}
