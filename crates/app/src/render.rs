//! Plain-text rendering of a snapshot.

use faraway_packing::{Item, PackingStats, SortCriterion};

use crate::state::AppState;

pub const TITLE: &str = "🏝️ Far Away 🧳";
pub const FORM_HEADING: &str = "What do you need for your 😍 trip?";
pub const EMPTY_STATS: &str = "Start adding some items to your packing list 🚀";

/// `[x] 12 Socks  #2`; the box is ticked once the item is packed.
pub fn item_line(item: &Item) -> String {
    let mark = if item.packed { 'x' } else { ' ' };
    format!(
        "[{mark}] {} {}  #{}",
        item.quantity, item.description, item.id
    )
}

/// The stats footer, or the empty-list nudge.
pub fn stats_line(stats: Option<PackingStats>) -> String {
    match stats {
        None => EMPTY_STATS.to_string(),
        Some(stats) => format!(
            "💼 You have {} items on your list, and you already packed {} ({}%).",
            stats.total, stats.packed_count, stats.packed_percentage
        ),
    }
}

pub fn sort_options(current: SortCriterion) -> String {
    SortCriterion::ALL
        .iter()
        .map(|c| {
            let marker = if *c == current { '*' } else { ' ' };
            format!("{marker} {:<12} {}", c.as_str(), c.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The list in display order followed by the stats footer.
pub fn screen(state: &AppState) -> String {
    let mut out = String::new();
    for item in state.visible_items() {
        out.push_str(&item_line(item));
        out.push('\n');
    }
    if state.list().is_empty() {
        out.push_str("(nothing on the list)\n");
    }
    out.push_str(&format!("({})\n", state.sort_by().label()));
    out.push_str(&stats_line(state.stats()));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use faraway_core::AggregateId;
    use faraway_packing::{ItemId, PackingList};

    #[test]
    fn packed_items_are_ticked() {
        let item = Item::new(ItemId(2), "Socks", 12);
        assert_eq!(item_line(&item), "[ ] 12 Socks  #2");
        assert_eq!(item_line(&item.with_packed(true)), "[x] 12 Socks  #2");
    }

    #[test]
    fn stats_footer_reads_like_a_sentence() {
        let stats = PackingStats {
            total: 2,
            packed_count: 1,
            packed_percentage: 50,
        };
        assert_eq!(
            stats_line(Some(stats)),
            "💼 You have 2 items on your list, and you already packed 1 (50%)."
        );
        assert_eq!(stats_line(None), EMPTY_STATS);
    }

    #[test]
    fn screen_follows_the_sort_criterion() {
        let list = PackingList::seeded(AggregateId::new()).toggle(ItemId(1));
        let state = AppState::new(list, SortCriterion::Packed);
        let screen = screen(&state);

        let socks = screen.find("Socks").unwrap();
        let passports = screen.find("Passports").unwrap();
        assert!(socks < passports);
        assert!(screen.contains("(sort by packed status)"));
        assert!(screen.ends_with("packed 1 (50%).\n"));
    }

    #[test]
    fn empty_screen_shows_the_nudge() {
        let state = AppState::new(PackingList::empty(AggregateId::new()), SortCriterion::Input);
        let screen = screen(&state);
        assert!(screen.contains("(nothing on the list)"));
        assert!(screen.contains(EMPTY_STATS));
    }

    #[test]
    fn sort_options_mark_the_current_choice() {
        let options = sort_options(SortCriterion::Description);
        assert!(options.contains("* description  sort by description"));
        assert!(options.contains("  input        sort by input order"));
    }
}
