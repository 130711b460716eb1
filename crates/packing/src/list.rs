use core::convert::Infallible;

use serde::{Deserialize, Serialize};

use faraway_core::{Aggregate, AggregateId, AggregateRoot};
use faraway_events::{Event, execute};

use crate::item::{Item, ItemId, seed_items};

/// Aggregate root: the packing list.
///
/// Items are kept in input order. Every transition consumes the current list
/// and returns the next one; nothing outside [`Aggregate::apply`] touches
/// `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackingList {
    id: AggregateId,
    items: Vec<Item>,
    version: u64,
}

impl PackingList {
    pub fn empty(id: AggregateId) -> Self {
        Self::with_items(id, Vec::new())
    }

    /// A list holding `items` as its starting contents (version 0).
    pub fn with_items(id: AggregateId, items: Vec<Item>) -> Self {
        Self {
            id,
            items,
            version: 0,
        }
    }

    /// A list pre-populated with [`seed_items`].
    pub fn seeded(id: AggregateId) -> Self {
        Self::with_items(id, seed_items())
    }

    /// Items in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Append `item`. The caller guarantees its id is not already in use.
    pub fn add(self, item: Item) -> Self {
        self.transition(&PackingCommand::AddItem(AddItem { item }))
    }

    /// Drop every item with this id. Unknown ids leave the list as it was.
    pub fn remove(self, item_id: ItemId) -> Self {
        self.transition(&PackingCommand::DeleteItem(DeleteItem { item_id }))
    }

    /// Flip `packed` on the item with this id. Unknown ids leave the list as it was.
    pub fn toggle(self, item_id: ItemId) -> Self {
        self.transition(&PackingCommand::ToggleItem(ToggleItem { item_id }))
    }

    /// Empty the list. Unconditional; asking the user first is the caller's job.
    pub fn clear(self) -> Self {
        self.transition(&PackingCommand::ClearList)
    }

    /// Decide and apply `command`, returning the next list and the events it produced.
    pub fn run(mut self, command: &PackingCommand) -> (Self, Vec<PackingEvent>) {
        let Ok(events) = execute(&mut self, command);
        (self, events)
    }

    fn transition(self, command: &PackingCommand) -> Self {
        self.run(command).0
    }
}

impl AggregateRoot for PackingList {
    type Id = AggregateId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub item: Item,
}

/// Command: ToggleItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleItem {
    pub item_id: ItemId,
}

/// Command: DeleteItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItem {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackingCommand {
    AddItem(AddItem),
    ToggleItem(ToggleItem),
    DeleteItem(DeleteItem),
    ClearList,
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item: Item,
}

/// Event: ItemToggled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemToggled {
    pub item_id: ItemId,
    /// `packed` of the (first) matching item after the flip.
    pub packed: bool,
}

/// Event: ItemDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDeleted {
    pub item_id: ItemId,
    /// How many items carried the id. More than one only after a caller reused an id.
    pub removed: usize,
}

/// Event: ListCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCleared {
    pub removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackingEvent {
    ItemAdded(ItemAdded),
    ItemToggled(ItemToggled),
    ItemDeleted(ItemDeleted),
    ListCleared(ListCleared),
}

impl Event for PackingEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PackingEvent::ItemAdded(_) => "packing.item.added",
            PackingEvent::ItemToggled(_) => "packing.item.toggled",
            PackingEvent::ItemDeleted(_) => "packing.item.deleted",
            PackingEvent::ListCleared(_) => "packing.list.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for PackingList {
    type Command = PackingCommand;
    type Event = PackingEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            PackingEvent::ItemAdded(e) => {
                self.items.push(e.item.clone());
            }
            PackingEvent::ItemToggled(e) => {
                for item in self.items.iter_mut().filter(|item| item.id == e.item_id) {
                    item.packed = !item.packed;
                }
            }
            PackingEvent::ItemDeleted(e) => {
                self.items.retain(|item| item.id != e.item_id);
            }
            PackingEvent::ListCleared(_) => {
                self.items = Vec::new();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        Ok(match command {
            PackingCommand::AddItem(cmd) => self.handle_add(cmd),
            PackingCommand::ToggleItem(cmd) => self.handle_toggle(cmd),
            PackingCommand::DeleteItem(cmd) => self.handle_delete(cmd),
            PackingCommand::ClearList => self.handle_clear(),
        })
    }
}

impl PackingList {
    fn handle_add(&self, cmd: &AddItem) -> Vec<PackingEvent> {
        vec![PackingEvent::ItemAdded(ItemAdded {
            item: cmd.item.clone(),
        })]
    }

    fn handle_toggle(&self, cmd: &ToggleItem) -> Vec<PackingEvent> {
        match self.get(cmd.item_id) {
            Some(item) => vec![PackingEvent::ItemToggled(ItemToggled {
                item_id: cmd.item_id,
                packed: !item.packed,
            })],
            None => Vec::new(),
        }
    }

    fn handle_delete(&self, cmd: &DeleteItem) -> Vec<PackingEvent> {
        let removed = self
            .items
            .iter()
            .filter(|item| item.id == cmd.item_id)
            .count();
        if removed == 0 {
            return Vec::new();
        }
        vec![PackingEvent::ItemDeleted(ItemDeleted {
            item_id: cmd.item_id,
            removed,
        })]
    }

    fn handle_clear(&self) -> Vec<PackingEvent> {
        vec![PackingEvent::ListCleared(ListCleared {
            removed: self.items.len(),
        })]
    }
}
