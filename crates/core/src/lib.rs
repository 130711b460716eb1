//! `faraway-core` — building blocks shared by the packing-list domain.
//!
//! Pure domain primitives only: no IO, no clocks other than id minting, no logging.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
