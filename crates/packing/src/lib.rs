//! Packing list domain module.
//!
//! The store: an input-ordered list of items with add, toggle, delete and
//! clear transitions, plus the derived views (sorting, statistics) computed
//! from it. Deterministic and IO-free.

pub mod item;
pub mod list;
pub mod view;

pub use item::{Item, ItemId, ItemIdGenerator, seed_items};
pub use list::{
    AddItem, DeleteItem, ItemAdded, ItemDeleted, ItemToggled, ListCleared, PackingCommand,
    PackingEvent, PackingList, ToggleItem,
};
pub use view::{PackingStats, SortCriterion};
