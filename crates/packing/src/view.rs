//! Derived views over a packing list: sorted projections and statistics.
//!
//! Views never mutate the list and are recomputed from input order on every
//! call, so switching criteria never depends on a previous sort.

use core::str::FromStr;

use feruca::Collator;
use serde::{Deserialize, Serialize};

use faraway_core::DomainError;

use crate::item::Item;
use crate::list::PackingList;

/// How the list is ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Insertion order.
    #[default]
    Input,
    /// Alphabetical order of descriptions under the Unicode collation algorithm.
    Description,
    /// Unpacked items first, then packed ones.
    Packed,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Input,
        SortCriterion::Description,
        SortCriterion::Packed,
    ];

    /// Short key used on the command line and in config.
    pub fn as_str(self) -> &'static str {
        match self {
            SortCriterion::Input => "input",
            SortCriterion::Description => "description",
            SortCriterion::Packed => "packed",
        }
    }

    /// Human label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::Input => "sort by input order",
            SortCriterion::Description => "sort by description",
            SortCriterion::Packed => "sort by packed status",
        }
    }
}

impl core::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriterion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        SortCriterion::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown sort criterion {key:?} (expected input, description or packed)"
                ))
            })
    }
}

/// Completion summary of a non-empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingStats {
    pub total: usize,
    pub packed_count: usize,
    /// `packed_count / total * 100`, rounded half up.
    pub packed_percentage: u8,
}

impl PackingStats {
    /// `None` for an empty list: there is no percentage to report.
    pub fn from_items(items: &[Item]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let total = items.len();
        let packed_count = items.iter().filter(|item| item.packed).count();
        // round(p / t * 100) == floor((200p + t) / 2t) for non-negative p, t > 0.
        let percentage = (packed_count * 200 + total) / (total * 2);

        Some(Self {
            total,
            packed_count,
            packed_percentage: u8::try_from(percentage).unwrap_or(100),
        })
    }

}

impl PackingList {
    /// Items ordered by `criterion`. Ties keep input order.
    pub fn sorted_view(&self, criterion: SortCriterion) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items().iter().collect();
        match criterion {
            SortCriterion::Input => {}
            SortCriterion::Description => {
                let mut collator = Collator::default();
                view.sort_by(|a, b| collator.collate(&a.description, &b.description));
            }
            SortCriterion::Packed => view.sort_by_key(|item| item.packed),
        }
        view
    }

    pub fn stats(&self) -> Option<PackingStats> {
        PackingStats::from_items(self.items())
    }
}
