use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use faraway_core::{DomainError, Entity};

/// Identifier of an item on the list.
///
/// Plain integers so they can be typed at a prompt. Uniqueness within a
/// session comes from [`ItemIdGenerator`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::invalid_id(format!("ItemId {s:?}: {e}")))
    }
}

/// One entry on the packing list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    /// How many to bring. The form keeps this within 1..=20; the list does not check.
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// A new, unpacked item.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    pub fn with_packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// The demo contents a fresh session starts with.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(ItemId(1), "Passports", 2),
        Item::new(ItemId(2), "Socks", 12),
    ]
}

/// Hands out item ids that never repeat within a session.
///
/// Ids are the wall clock in milliseconds, bumped past the last id handed out
/// (or observed) whenever the clock repeats or runs backwards.
#[derive(Debug, Clone, Default)]
pub struct ItemIdGenerator {
    last: u64,
}

impl ItemIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that will only return ids greater than every id in `items`.
    pub fn after<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut ids = Self::new();
        for item in items {
            ids.observe(item.id);
        }
        ids
    }

    /// Record an id allocated elsewhere so it is never handed out again.
    pub fn observe(&mut self, id: ItemId) {
        self.last = self.last.max(id.0);
    }

    pub fn next_id(&mut self) -> ItemId {
        self.next_at(Utc::now())
    }

    pub fn next_at(&mut self, now: DateTime<Utc>) -> ItemId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let next = millis.max(self.last.saturating_add(1));
        self.last = next;
        ItemId(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn new_items_start_unpacked() {
        let item = Item::new(ItemId(7), "Boots", 1);
        assert!(!item.packed);
        assert_eq!(item.id(), ItemId(7));
    }

    #[test]
    fn seed_matches_the_demo_list() {
        let seed = seed_items();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0], Item::new(ItemId(1), "Passports", 2));
        assert_eq!(seed[1], Item::new(ItemId(2), "Socks", 12));
    }

    #[test]
    fn ids_follow_the_clock() {
        let mut ids = ItemIdGenerator::new();
        assert_eq!(ids.next_at(at(1_000)), ItemId(1_000));
        assert_eq!(ids.next_at(at(2_500)), ItemId(2_500));
    }

    #[test]
    fn same_millisecond_still_yields_distinct_ids() {
        let mut ids = ItemIdGenerator::new();
        let a = ids.next_at(at(5_000));
        let b = ids.next_at(at(5_000));
        let c = ids.next_at(at(4_000));
        assert_eq!(a, ItemId(5_000));
        assert_eq!(b, ItemId(5_001));
        assert_eq!(c, ItemId(5_002));
    }

    #[test]
    fn never_reissues_an_observed_id() {
        let items = vec![
            Item::new(ItemId(10_000), "Tent", 1),
            Item::new(ItemId(3), "Map", 1),
        ];
        let mut ids = ItemIdGenerator::after(&items);
        assert_eq!(ids.next_at(at(9_000)), ItemId(10_001));
    }

    #[test]
    fn parses_ids_from_prompt_text() {
        assert_eq!(" 42 ".parse::<ItemId>().unwrap(), ItemId(42));
        assert!(matches!(
            "abc".parse::<ItemId>(),
            Err(DomainError::InvalidId(_))
        ));
        assert!("-1".parse::<ItemId>().is_err());
    }
}
