//! SQLite database connection management.
//!
//! Provides a connection pool to the SQLite database with WAL mode
//! enabled, so the watch loop's writes and interactive reads can overlap
//! without blocking. The database file and its parent directories are
//! created automatically if they don't exist.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use clipdex_core::history::HistoryStore;

use crate::config::Config;
use crate::migrate;
use crate::sqlite_store::SqliteBackend;

/// Create a connection pool to the configured SQLite database.
///
/// - Creates the database file and parent directories if they don't exist.
/// - Enables WAL journal mode for concurrent read/write.
/// - Returns a pool with up to 5 connections.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let db_path = &config.db.path;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Connect, migrate, and build a [`HistoryStore`] with its index loaded
/// from durable storage.
pub async fn open_store(config: &Config) -> Result<HistoryStore> {
    let pool = connect(config).await?;
    migrate::run_migrations(&pool).await?;

    let store = HistoryStore::new(Arc::new(SqliteBackend::new(pool)));
    store.reload().await?;
    Ok(store)
}
