//! SQLite-backed [`HistoryBackend`] implementation.
//!
//! Maps each backend operation to a single SQL statement against the
//! `clipboard_history` table. The `fingerprint` primary key enforces the
//! uniqueness the dedup layer relies on: inserting a duplicate fails at
//! the database rather than silently overwriting.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use clipdex_core::models::HistoryItem;
use clipdex_core::store::HistoryBackend;

/// SQLite implementation of the [`HistoryBackend`] trait.
pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl HistoryBackend for SqliteBackend {
    async fn insert(&self, item: &HistoryItem) -> Result<()> {
        sqlx::query(
            "INSERT INTO clipboard_history (fingerprint, content, captured_at, copy_count) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&item.fingerprint)
        .bind(&item.content)
        .bind(item.captured_at)
        .bind(item.copy_count)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, fingerprint: &str) -> Result<()> {
        sqlx::query("DELETE FROM clipboard_history WHERE fingerprint = ?")
            .bind(fingerprint)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn increment_count(&self, fingerprint: &str) -> Result<()> {
        let result =
            sqlx::query("UPDATE clipboard_history SET copy_count = copy_count + 1 WHERE fingerprint = ?")
                .bind(fingerprint)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            bail!("no row with fingerprint: {fingerprint}");
        }
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<HistoryItem>> {
        let rows = sqlx::query(
            "SELECT fingerprint, content, captured_at, copy_count \
             FROM clipboard_history \
             ORDER BY copy_count DESC, captured_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        // Fixed-schema deserialization: a row that fails to parse is a
        // storage failure, not silently zeroed data.
        rows.iter()
            .map(|row| {
                Ok(HistoryItem {
                    fingerprint: row.try_get("fingerprint")?,
                    content: row.try_get("content")?,
                    captured_at: row.try_get("captured_at")?,
                    copy_count: row.try_get("copy_count")?,
                })
            })
            .collect::<Result<Vec<_>>>()
            .context("malformed row in clipboard_history")
    }
}
