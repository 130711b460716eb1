use serde::Serialize;

use faraway_packing::{Item, PackingList, PackingStats, SortCriterion};

/// One immutable snapshot of everything the screen shows.
///
/// Snapshots are replaced wholesale by the dispatcher; nothing keeps a
/// reference to an older one across actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppState {
    list: PackingList,
    sort_by: SortCriterion,
}

impl AppState {
    pub fn new(list: PackingList, sort_by: SortCriterion) -> Self {
        Self { list, sort_by }
    }

    pub fn list(&self) -> &PackingList {
        &self.list
    }

    pub fn sort_by(&self) -> SortCriterion {
        self.sort_by
    }

    /// Items in the order they should be displayed.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.list.sorted_view(self.sort_by)
    }

    pub fn stats(&self) -> Option<PackingStats> {
        self.list.stats()
    }

    pub fn with_sort(self, sort_by: SortCriterion) -> Self {
        Self { sort_by, ..self }
    }

    pub(crate) fn into_list(self) -> (PackingList, SortCriterion) {
        (self.list, self.sort_by)
    }
}
