use serde::{Deserialize, Serialize};

use faraway_packing::{ItemId, SortCriterion};

/// What the form hands over once it accepts a submission.
///
/// The id and the initial `packed = false` are filled in by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub description: String,
    pub quantity: u32,
}

/// A discrete user intent. The dispatcher consumes these one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    AddItem(NewItem),
    ToggleItem(ItemId),
    DeleteItem(ItemId),
    /// Already confirmed; see [`crate::confirm::request_clear`].
    ClearList,
    SetSortCriterion(SortCriterion),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddItem(_) => "add_item",
            Action::ToggleItem(_) => "toggle_item",
            Action::DeleteItem(_) => "delete_item",
            Action::ClearList => "clear_list",
            Action::SetSortCriterion(_) => "set_sort_criterion",
        }
    }
}
