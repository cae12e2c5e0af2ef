//! Periodic clipboard polling.
//!
//! Mirrors an interactive clipboard manager's background tick: every
//! interval, read the clipboard and record unseen content in the store.
//! Transient clipboard errors are warnings, not fatal — the loop keeps
//! running until the process is stopped.

use std::time::Duration;

use anyhow::Result;

use clipdex_core::history::HistoryStore;

use crate::clipboard::ClipboardIo;

/// One poll cycle: read the clipboard and record its content if new.
///
/// Returns `Ok(true)` when a new entry was stored, `Ok(false)` when the
/// clipboard was empty or the content was already in history.
pub async fn poll_once(store: &HistoryStore, clipboard: &mut dyn ClipboardIo) -> Result<bool> {
    let content = clipboard.read_current()?;
    if content.is_empty() {
        return Ok(false);
    }
    store.add(&content).await
}

/// Poll the clipboard forever, every `poll_interval_ms` milliseconds.
pub async fn run_watch(
    store: &HistoryStore,
    clipboard: &mut dyn ClipboardIo,
    poll_interval_ms: u64,
) -> Result<()> {
    println!("Watching clipboard every {poll_interval_ms} ms (Ctrl-C to stop)");

    let mut ticker = tokio::time::interval(Duration::from_millis(poll_interval_ms));
    loop {
        ticker.tick().await;
        match poll_once(store, clipboard).await {
            Ok(true) => println!("Captured new entry ({} total)", store.count()),
            Ok(false) => {}
            Err(e) => eprintln!("Warning: clipboard poll failed: {e:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use clipdex_core::store::memory::InMemoryBackend;
    use std::sync::Arc;

    fn test_store() -> HistoryStore {
        HistoryStore::new(Arc::new(InMemoryBackend::new()))
    }

    #[tokio::test]
    async fn empty_clipboard_captures_nothing() {
        let store = test_store();
        let mut clipboard = MemoryClipboard::new();

        assert!(!poll_once(&store, &mut clipboard).await.unwrap());
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn repeated_polls_capture_once() {
        let store = test_store();
        let mut clipboard = MemoryClipboard::new();
        clipboard.write_current("copied once").unwrap();

        assert!(poll_once(&store, &mut clipboard).await.unwrap());
        assert!(!poll_once(&store, &mut clipboard).await.unwrap());
        assert!(!poll_once(&store, &mut clipboard).await.unwrap());
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn changing_content_captures_each_value() {
        let store = test_store();
        let mut clipboard = MemoryClipboard::new();

        clipboard.write_current("first").unwrap();
        poll_once(&store, &mut clipboard).await.unwrap();

        clipboard.write_current("second").unwrap();
        poll_once(&store, &mut clipboard).await.unwrap();

        // Copying the first value again is a no-op for the store.
        clipboard.write_current("first").unwrap();
        assert!(!poll_once(&store, &mut clipboard).await.unwrap());

        assert_eq!(store.count(), 2);
    }
}
