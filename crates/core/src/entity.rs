//! Entities: records that keep their identity while their fields change.

/// Something addressed by id rather than by value.
///
/// A packed and an unpacked copy of the same item are the same entity.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;
}
