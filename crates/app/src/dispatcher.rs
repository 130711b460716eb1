//! Action dispatch: the single owner of the current snapshot.
//!
//! ```text
//! Action
//!   ↓
//! 1. Translate to a packing command (ids minted here for new items)
//!   ↓
//! 2. Run the command against the current list (decide + apply)
//!   ↓
//! 3. Journal the resulting events
//!   ↓
//! 4. Replace the snapshot
//! ```
//!
//! Sort changes skip steps 1–3: they only touch the display order.

use faraway_core::{AggregateId, AggregateRoot};
use faraway_events::EventEnvelope;
use faraway_packing::{
    AddItem, DeleteItem, Item, ItemIdGenerator, PackingCommand, PackingEvent, PackingList,
    ToggleItem,
};

use crate::action::Action;
use crate::config::AppConfig;
use crate::state::AppState;

/// Aggregate type recorded on every journal envelope.
pub const AGGREGATE_TYPE: &str = "packing_list";

/// Consumes actions one at a time, each producing a fresh [`AppState`].
///
/// The journal is an in-memory record of what happened this session; it is
/// never read back to rebuild state.
#[derive(Debug)]
pub struct Dispatcher {
    state: AppState,
    ids: ItemIdGenerator,
    journal: Vec<EventEnvelope<PackingEvent>>,
}

impl Dispatcher {
    /// Start from `state`, minting item ids above any already on the list.
    pub fn new(state: AppState) -> Self {
        let ids = ItemIdGenerator::after(state.list().items());
        Self::with_ids(state, ids)
    }

    pub fn with_ids(state: AppState, ids: ItemIdGenerator) -> Self {
        Self {
            state,
            ids,
            journal: Vec::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let id = AggregateId::new();
        let list = if config.seed {
            PackingList::seeded(id)
        } else {
            PackingList::empty(id)
        };
        Self::new(AppState::new(list, config.sort_by))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn journal(&self) -> &[EventEnvelope<PackingEvent>] {
        &self.journal
    }

    /// Apply one action and return the snapshot that replaced the old one.
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        let name = action.name();
        let list_id = *self.state.list().id();

        let placeholder = AppState::new(PackingList::empty(list_id), self.state.sort_by());
        let current = std::mem::replace(&mut self.state, placeholder);

        let (next, events) = self.reduce(current, action);
        let recorded = events.len();
        self.record(list_id, next.list().version(), events);

        tracing::debug!(
            action = name,
            events = recorded,
            items = next.list().len(),
            version = next.list().version(),
            sort_by = %next.sort_by(),
            "action dispatched"
        );

        self.state = next;
        &self.state
    }

    fn reduce(&mut self, state: AppState, action: Action) -> (AppState, Vec<PackingEvent>) {
        let command = match action {
            Action::SetSortCriterion(sort_by) => return (state.with_sort(sort_by), Vec::new()),
            Action::AddItem(new_item) => {
                let id = self.ids.next_id();
                PackingCommand::AddItem(AddItem {
                    item: Item::new(id, new_item.description, new_item.quantity),
                })
            }
            Action::ToggleItem(item_id) => PackingCommand::ToggleItem(ToggleItem { item_id }),
            Action::DeleteItem(item_id) => PackingCommand::DeleteItem(DeleteItem { item_id }),
            Action::ClearList => PackingCommand::ClearList,
        };

        let (list, sort_by) = state.into_list();
        let (list, events) = list.run(&command);
        (AppState::new(list, sort_by), events)
    }

    /// Journal `events`, which brought the list to `version`.
    fn record(&mut self, list_id: AggregateId, version: u64, events: Vec<PackingEvent>) {
        let first = version - events.len() as u64 + 1;
        for (sequence_number, event) in (first..).zip(events) {
            let envelope = EventEnvelope::record(list_id, AGGREGATE_TYPE, sequence_number, event);
            tracing::trace!(
                event_id = %envelope.event_id(),
                event_type = envelope.event_type(),
                sequence_number,
                "event journaled"
            );
            self.journal.push(envelope);
        }
    }
}
