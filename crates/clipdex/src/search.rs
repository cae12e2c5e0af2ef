//! The `search` command: fuzzy retrieval over the ranked history.

use anyhow::Result;

use clipdex_core::history::HistoryStore;
use clipdex_core::search::search;

use crate::items::print_items;

/// Run a fuzzy search and print matches by descending score.
///
/// An empty query is the "no filter" case and lists everything in
/// ranking order, which is distinct from a query that matched nothing.
pub fn run_search(store: &HistoryStore, query: &str) -> Result<()> {
    let items = store.get_all();

    match search(&items, query) {
        None => {
            if items.is_empty() {
                println!("History is empty.");
            } else {
                print_items(&items);
            }
        }
        Some(matches) if matches.is_empty() => {
            println!("No matches for \"{query}\".");
        }
        Some(matches) => {
            println!("{} match(es) for \"{query}\":", matches.len());
            print_items(&matches);
        }
    }

    Ok(())
}
