//! The history store: an in-memory ranked index mirroring durable rows.
//!
//! [`HistoryStore`] owns deduplication, ranking, and CRUD over a
//! [`HistoryBackend`]. The index is an explicit cache of the backend's
//! rows: a `Vec` kept in canonical ranking order plus a fingerprint set
//! for O(1) duplicate checks, both behind one `RwLock` and mutated only
//! through the store's own methods. External callers receive clones,
//! never references into the index.
//!
//! # Ranking
//!
//! Items are ordered by `copy_count` descending, then `captured_at`
//! descending: frequently reused entries surface above one-off entries
//! even when older, and among equally frequent entries the most recent
//! wins. This is the order exposed by [`get_all`](HistoryStore::get_all)
//! and [`get`](HistoryStore::get), and the base order the search facade
//! re-ranks.
//!
//! # Failure semantics
//!
//! Every mutation is fail-closed: the durable write happens first, and
//! the index is only advanced after it succeeds. A backend error leaves
//! the index exactly at the last known-good durable state. Readers take
//! the lock after the index update, so a mutation is either fully
//! visible or not at all.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use anyhow::{bail, Result};

use crate::models::{fingerprint, HistoryItem};
use crate::store::HistoryBackend;

#[derive(Default)]
struct Index {
    items: Vec<HistoryItem>,
    fingerprints: HashSet<String>,
}

impl Index {
    /// Restore canonical ranking order after a mutation. Stable, so ties
    /// keep their previous relative order.
    fn rerank(&mut self) {
        self.items.sort_by(|a, b| {
            b.copy_count
                .cmp(&a.copy_count)
                .then(b.captured_at.cmp(&a.captured_at))
        });
    }
}

/// Deduplicating, ranked clipboard history over a durable backend.
pub struct HistoryStore {
    backend: Arc<dyn HistoryBackend>,
    index: RwLock<Index>,
}

impl HistoryStore {
    /// Create a store over `backend` with an empty index. Call
    /// [`reload`](HistoryStore::reload) to populate it from durable
    /// storage.
    pub fn new(backend: Arc<dyn HistoryBackend>) -> Self {
        Self {
            backend,
            index: RwLock::new(Index::default()),
        }
    }

    /// Record `content` if it has not been seen before.
    ///
    /// Returns `Ok(false)` without mutating anything when an item with
    /// the same fingerprint already exists — re-copying identical content
    /// is a no-op, not a count bump; callers that want frequency tracking
    /// use [`increment_count`](HistoryStore::increment_count). A backend
    /// failure is returned as an error and leaves the index unchanged.
    pub async fn add(&self, content: &str) -> Result<bool> {
        let item = HistoryItem::new(content);

        {
            let index = self.index.read().unwrap();
            if index.fingerprints.contains(&item.fingerprint) {
                return Ok(false);
            }
        }

        self.backend.insert(&item).await?;

        let mut index = self.index.write().unwrap();
        if index.fingerprints.insert(item.fingerprint.clone()) {
            index.items.push(item);
            index.rerank();
        }
        Ok(true)
    }

    /// All live items in ranking order. Stable across calls absent
    /// mutation.
    pub fn get_all(&self) -> Vec<HistoryItem> {
        self.index.read().unwrap().items.clone()
    }

    /// Positional lookup into the ranking order; `None` when out of
    /// bounds.
    pub fn get(&self, position: usize) -> Option<HistoryItem> {
        self.index.read().unwrap().items.get(position).cloned()
    }

    /// Remove the item at `position` from durable storage and the index.
    ///
    /// Returns `Ok(false)` when `position` is out of bounds. A backend
    /// failure is returned as an error and leaves the index unchanged.
    pub async fn delete(&self, position: usize) -> Result<bool> {
        let target = {
            let index = self.index.read().unwrap();
            match index.items.get(position) {
                Some(item) => item.fingerprint.clone(),
                None => return Ok(false),
            }
        };

        self.backend.delete(&target).await?;

        let mut index = self.index.write().unwrap();
        if index.fingerprints.remove(&target) {
            index.items.retain(|i| i.fingerprint != target);
        }
        Ok(true)
    }

    /// Increment the copy count of the item with `fp`, in durable
    /// storage and in the index, then restore ranking order.
    pub async fn increment_count(&self, fp: &str) -> Result<()> {
        {
            let index = self.index.read().unwrap();
            if !index.fingerprints.contains(fp) {
                bail!("no history item with fingerprint {fp}");
            }
        }

        self.backend.increment_count(fp).await?;

        let mut index = self.index.write().unwrap();
        if let Some(item) = index.items.iter_mut().find(|i| i.fingerprint == fp) {
            item.copy_count += 1;
        }
        index.rerank();
        Ok(())
    }

    /// Number of live items. O(1).
    pub fn count(&self) -> usize {
        self.index.read().unwrap().items.len()
    }

    /// True when the history holds no items.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether content with this exact text is already recorded.
    pub fn contains(&self, content: &str) -> bool {
        let fp = fingerprint(content);
        self.index.read().unwrap().fingerprints.contains(&fp)
    }

    /// Discard the index and rebuild it from durable storage, in the
    /// backend's canonical order. Used at startup and after external
    /// mutation of the database.
    pub async fn reload(&self) -> Result<()> {
        let items = self.backend.load_all().await?;

        let mut index = self.index.write().unwrap();
        index.fingerprints = items.iter().map(|i| i.fingerprint.clone()).collect();
        index.items = items;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryBackend;
    use std::collections::HashSet;

    fn store() -> (Arc<InMemoryBackend>, HistoryStore) {
        let backend = Arc::new(InMemoryBackend::new());
        let store = HistoryStore::new(backend.clone());
        (backend, store)
    }

    fn row(content: &str, captured_at: i64, copy_count: i64) -> HistoryItem {
        HistoryItem {
            content: content.to_string(),
            fingerprint: fingerprint(content),
            captured_at,
            copy_count,
        }
    }

    #[tokio::test]
    async fn add_is_dedup_idempotent() {
        let (_, store) = store();
        assert!(store.add("first").await.unwrap());
        assert!(!store.add("first").await.unwrap());
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn add_distinct_content_grows_history() {
        let (_, store) = store();
        assert!(store.add("first").await.unwrap());
        assert!(store.add("second").await.unwrap());
        assert!(!store.add("first").await.unwrap());
        assert_eq!(store.count(), 2);

        let contents: HashSet<String> = [store.get(0).unwrap(), store.get(1).unwrap()]
            .iter()
            .map(|i| i.content.clone())
            .collect();
        assert!(contents.contains("first"));
        assert!(contents.contains("second"));
    }

    #[tokio::test]
    async fn get_out_of_bounds_is_none() {
        let (_, store) = store();
        store.add("only").await.unwrap();
        assert!(store.get(0).is_some());
        assert!(store.get(1).is_none());
    }

    #[tokio::test]
    async fn delete_out_of_bounds_changes_nothing() {
        let (_, store) = store();
        store.add("only").await.unwrap();
        assert!(!store.delete(5).await.unwrap());
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn delete_removes_from_index_and_backend() {
        let (_, store) = store();
        store.add("one").await.unwrap();
        store.add("two").await.unwrap();

        assert!(store.delete(0).await.unwrap());
        assert_eq!(store.count(), 1);

        store.reload().await.unwrap();
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn increment_count_reranks() {
        let (backend, store) = store();
        backend.insert(&row("older", 100, 0)).await.unwrap();
        backend.insert(&row("newer", 200, 0)).await.unwrap();
        store.reload().await.unwrap();
        assert_eq!(store.get(0).unwrap().content, "newer");

        let fp = fingerprint("older");
        for _ in 0..3 {
            store.increment_count(&fp).await.unwrap();
        }

        let top = store.get(0).unwrap();
        assert_eq!(top.content, "older");
        assert_eq!(top.copy_count, 3);

        // Durable state agrees after a rebuild.
        store.reload().await.unwrap();
        assert_eq!(store.get(0).unwrap().content, "older");
    }

    #[tokio::test]
    async fn increment_count_unknown_fingerprint_fails() {
        let (_, store) = store();
        assert!(store.increment_count("deadbeef").await.is_err());
    }

    #[tokio::test]
    async fn ranking_order_count_then_recency() {
        let (backend, store) = store();
        backend.insert(&row("a", 100, 0)).await.unwrap();
        backend.insert(&row("b", 200, 2)).await.unwrap();
        backend.insert(&row("c", 300, 2)).await.unwrap();
        backend.insert(&row("d", 400, 0)).await.unwrap();
        store.reload().await.unwrap();

        let order: Vec<String> = store.get_all().iter().map(|i| i.content.clone()).collect();
        assert_eq!(order, vec!["c", "b", "d", "a"]);
    }

    #[tokio::test]
    async fn capture_time_survives_reload() {
        let (backend, store) = store();
        backend.insert(&row("entry", 12345, 0)).await.unwrap();
        store.reload().await.unwrap();
        assert_eq!(store.get(0).unwrap().captured_at, 12345);
    }

    #[tokio::test]
    async fn failed_insert_leaves_index_unchanged() {
        let (backend, store) = store();
        store.add("kept").await.unwrap();

        backend.set_fail_writes(true);
        assert!(store.add("lost").await.is_err());
        assert_eq!(store.count(), 1);
        assert!(!store.contains("lost"));

        // Recovery: the same content can be added once storage is back.
        backend.set_fail_writes(false);
        assert!(store.add("lost").await.unwrap());
        assert_eq!(store.count(), 2);
    }

    #[tokio::test]
    async fn failed_delete_leaves_index_unchanged() {
        let (backend, store) = store();
        store.add("sticky").await.unwrap();

        backend.set_fail_writes(true);
        assert!(store.delete(0).await.is_err());
        assert_eq!(store.count(), 1);
        assert!(store.contains("sticky"));
    }

    #[tokio::test]
    async fn failed_increment_leaves_count_unchanged() {
        let (backend, store) = store();
        store.add("entry").await.unwrap();
        let fp = store.get(0).unwrap().fingerprint;

        backend.set_fail_writes(true);
        assert!(store.increment_count(&fp).await.is_err());
        assert_eq!(store.get(0).unwrap().copy_count, 0);
    }

    #[tokio::test]
    async fn empty_content_is_a_valid_item() {
        let (_, store) = store();
        assert!(store.add("").await.unwrap());
        assert!(!store.add("").await.unwrap());
        assert_eq!(store.count(), 1);
        assert_eq!(store.get(0).unwrap().content, "");
    }

    #[tokio::test]
    async fn reload_discards_stale_index() {
        let (backend, store) = store();
        store.add("kept").await.unwrap();

        // External mutation behind the store's back.
        backend.delete(&fingerprint("kept")).await.unwrap();
        backend.insert(&row("external", 999, 5)).await.unwrap();

        store.reload().await.unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.get(0).unwrap().content, "external");
    }
}
