//! In-memory [`HistoryBackend`] implementation for testing.
//!
//! Rows live in a `HashMap` behind `std::sync::RwLock`. Ordering is
//! applied at load time, matching the SQL backend's
//! `ORDER BY copy_count DESC, captured_at DESC`. Write failure can be
//! injected to exercise the store's fail-closed paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::models::HistoryItem;

use super::HistoryBackend;

/// In-memory backend for tests.
#[derive(Default)]
pub struct InMemoryBackend {
    rows: RwLock<HashMap<String, HistoryItem>>,
    fail_writes: AtomicBool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write operation fail, simulating a durable
    /// storage outage.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("simulated storage failure");
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryBackend for InMemoryBackend {
    async fn insert(&self, item: &HistoryItem) -> Result<()> {
        self.check_writable()?;
        let mut rows = self.rows.write().unwrap();
        if rows.contains_key(&item.fingerprint) {
            bail!("fingerprint already exists: {}", item.fingerprint);
        }
        rows.insert(item.fingerprint.clone(), item.clone());
        Ok(())
    }

    async fn delete(&self, fingerprint: &str) -> Result<()> {
        self.check_writable()?;
        self.rows.write().unwrap().remove(fingerprint);
        Ok(())
    }

    async fn increment_count(&self, fingerprint: &str) -> Result<()> {
        self.check_writable()?;
        let mut rows = self.rows.write().unwrap();
        match rows.get_mut(fingerprint) {
            Some(item) => {
                item.copy_count += 1;
                Ok(())
            }
            None => bail!("no row with fingerprint: {}", fingerprint),
        }
    }

    async fn load_all(&self) -> Result<Vec<HistoryItem>> {
        let rows = self.rows.read().unwrap();
        let mut items: Vec<HistoryItem> = rows.values().cloned().collect();
        items.sort_by(|a, b| {
            b.copy_count
                .cmp(&a.copy_count)
                .then(b.captured_at.cmp(&a.captured_at))
        });
        Ok(items)
    }
}
