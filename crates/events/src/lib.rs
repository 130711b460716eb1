//! Events emitted by aggregates and the envelope they travel in.

pub mod envelope;
pub mod event;
pub mod handler;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use handler::execute;
