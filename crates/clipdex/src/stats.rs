//! History statistics: entry count and the most-reused entries.

use clipdex_core::history::HistoryStore;

/// Number of top-ranked entries shown by `clipdex stats`.
const TOP_ENTRIES: usize = 5;

pub fn run_stats(store: &HistoryStore) {
    let items = store.get_all();
    println!("Entries: {}", items.len());

    let reused: Vec<_> = items
        .iter()
        .filter(|i| i.copy_count > 0)
        .take(TOP_ENTRIES)
        .collect();

    if reused.is_empty() {
        return;
    }

    println!("Most reused:");
    for item in reused {
        let preview: String = item.content.chars().take(40).collect();
        println!("  {:>5}x  {}", item.copy_count, preview);
    }
}
