//! Item commands: list, show, copy, add, delete, bump.
//!
//! These are the presentation layer over the history store. Row numbers
//! printed here are 0-based positions in the displayed sequence and feed
//! straight back into `get`, `delete`, and `bump`.

use anyhow::{bail, Result};

use clipdex_core::history::HistoryStore;
use clipdex_core::models::HistoryItem;

use crate::clipboard::ClipboardIo;

const PREVIEW_CHARS: usize = 60;

/// Print every entry in ranking order.
pub fn run_list(store: &HistoryStore) {
    let items = store.get_all();
    if items.is_empty() {
        println!("History is empty.");
        return;
    }
    print_items(&items);
}

/// Print the full content of the entry at `index`.
pub fn run_show(store: &HistoryStore, index: usize) -> Result<()> {
    match store.get(index) {
        Some(item) => {
            println!("{}", item.content);
            Ok(())
        }
        None => bail!("no history entry at index {index}"),
    }
}

/// Write the entry at `index` back to the clipboard and bump its copy
/// count, so reuse feeds back into ranking.
pub async fn run_copy(
    store: &HistoryStore,
    index: usize,
    clipboard: &mut dyn ClipboardIo,
) -> Result<()> {
    let item = match store.get(index) {
        Some(item) => item,
        None => bail!("no history entry at index {index}"),
    };

    clipboard.write_current(&item.content)?;
    store.increment_count(&item.fingerprint).await?;
    println!("Copied entry {index} to clipboard.");
    Ok(())
}

/// Record `content` directly, bypassing the clipboard.
pub async fn run_add(store: &HistoryStore, content: &str) -> Result<()> {
    if store.add(content).await? {
        println!("Stored new entry ({} total).", store.count());
    } else {
        println!("Already in history.");
    }
    Ok(())
}

/// Delete the entry at `index`.
pub async fn run_delete(store: &HistoryStore, index: usize) -> Result<()> {
    if store.delete(index).await? {
        println!("Deleted entry {index} ({} remaining).", store.count());
        Ok(())
    } else {
        bail!("no history entry at index {index}")
    }
}

/// Explicitly bump the copy count of the entry at `index`.
pub async fn run_bump(store: &HistoryStore, index: usize) -> Result<()> {
    let item = match store.get(index) {
        Some(item) => item,
        None => bail!("no history entry at index {index}"),
    };

    store.increment_count(&item.fingerprint).await?;
    println!(
        "Bumped entry {index} to copy count {}.",
        item.copy_count + 1
    );
    Ok(())
}

/// Shared table printer for list and search output.
pub(crate) fn print_items(items: &[HistoryItem]) {
    println!("{:>4}  {:>5}  {:<16}  CONTENT", "IDX", "COUNT", "CAPTURED");
    for (i, item) in items.iter().enumerate() {
        println!(
            "{:>4}  {:>5}  {:<16}  {}",
            i,
            item.copy_count,
            format_captured_at(item.captured_at),
            preview(&item.content, PREVIEW_CHARS)
        );
    }
}

/// Format a Unix timestamp for table display.
fn format_captured_at(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// One-line preview: newlines flattened, truncated to `max_chars`
/// codepoints.
fn preview(content: &str, max_chars: usize) -> String {
    let flattened: String = content
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    if flattened.chars().count() <= max_chars {
        flattened
    } else {
        let truncated: String = flattened.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
