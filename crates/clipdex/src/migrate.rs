//! Database schema migrations (idempotent).
//!
//! Creates the `clipboard_history` table and its ranking index, and
//! upgrades legacy databases that predate the `copy_count` column.

use anyhow::Result;
use sqlx::SqlitePool;

/// Create the schema if missing and apply any pending migrations.
/// Safe to run on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    migrate_legacy_schema(pool).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clipboard_history (
            fingerprint TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            captured_at INTEGER NOT NULL,
            copy_count INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_history_rank \
         ON clipboard_history(copy_count DESC, captured_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Add the `copy_count` column to tables created before ranking existed.
async fn migrate_legacy_schema(pool: &SqlitePool) -> Result<()> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='clipboard_history'",
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        return Ok(());
    }

    let has_count: bool = sqlx::query_scalar(
        "SELECT COUNT(*) > 0 FROM pragma_table_info('clipboard_history') WHERE name = 'copy_count'",
    )
    .fetch_one(pool)
    .await?;

    if has_count {
        return Ok(());
    }

    sqlx::query("ALTER TABLE clipboard_history ADD COLUMN copy_count INTEGER NOT NULL DEFAULT 0")
        .execute(pool)
        .await?;

    Ok(())
}
