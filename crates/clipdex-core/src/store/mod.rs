//! Storage abstraction for Clipdex.
//!
//! The [`HistoryBackend`] trait defines the durable-store contract the
//! [`HistoryStore`](crate::history::HistoryStore) is built on, enabling
//! pluggable backends (SQLite in the application crate, in-memory for
//! tests).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.
//!
//! # Contract
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`insert`](HistoryBackend::insert) | Persist a new item; duplicate fingerprints must fail |
//! | [`delete`](HistoryBackend::delete) | Remove an item by fingerprint |
//! | [`increment_count`](HistoryBackend::increment_count) | Bump an item's copy count |
//! | [`load_all`](HistoryBackend::load_all) | Read every row in canonical ranking order |

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::HistoryItem;

/// Abstract durable storage for clipboard history.
///
/// All operations are async (via `async-trait`). The in-memory
/// implementation returns immediately-ready futures.
#[async_trait]
pub trait HistoryBackend: Send + Sync {
    /// Persist a new item.
    ///
    /// The fingerprint acts as a unique key: inserting an existing
    /// fingerprint must return an error rather than silently overwrite.
    async fn insert(&self, item: &HistoryItem) -> Result<()>;

    /// Remove the item with the given fingerprint. Deleting a fingerprint
    /// with no matching row is not an error (zero rows affected).
    async fn delete(&self, fingerprint: &str) -> Result<()>;

    /// Increment the copy count of the item with the given fingerprint.
    async fn increment_count(&self, fingerprint: &str) -> Result<()>;

    /// Read all rows, ordered by copy count (descending) and then
    /// capture time (most recent first).
    async fn load_all(&self) -> Result<Vec<HistoryItem>>;
}
