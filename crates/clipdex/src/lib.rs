//! # Clipdex
//!
//! **A local clipboard-history manager with ranked fuzzy retrieval.**
//!
//! Clipdex records text copied to the OS clipboard, deduplicates it by
//! content fingerprint, tracks how often each distinct entry recurs, and
//! retrieves prior entries through a fuzzy subsequence search.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌──────────────┐   ┌──────────┐
//! │ Clipboard │──▶│ HistoryStore │──▶│  SQLite  │
//! │  poller   │   │ dedup + rank │   │   (WAL)  │
//! └───────────┘   └──────┬───────┘   └──────────┘
//!                        │
//!                        ▼
//!                 ┌─────────────┐
//!                 │ Fuzzy search│
//!                 │  (clipdex)  │
//!                 └─────────────┘
//! ```
//!
//! ## Data Flow
//!
//! 1. The **watcher** ([`watch`]) polls the clipboard on an interval and
//!    hands new text to the store.
//! 2. The **history store** (`clipdex_core::history`) fingerprints the
//!    content (SHA-256), rejects duplicates, persists the row through the
//!    SQLite backend ([`sqlite_store`]), and keeps an in-memory index in
//!    ranking order (copy count descending, then recency).
//! 3. On query, the **search facade** (`clipdex_core::search`) scores
//!    every entry with the fuzzy subsequence scorer and returns matches
//!    sorted by descending score.
//! 4. Selecting an entry writes it back to the clipboard ([`clipboard`])
//!    and bumps its copy count, which feeds future ranking.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and defaults |
//! | [`db`] | SQLite connection pool (WAL mode) and store construction |
//! | [`migrate`] | Idempotent schema creation and legacy migrations |
//! | [`sqlite_store`] | SQLite implementation of the storage backend |
//! | [`clipboard`] | Clipboard I/O boundary (`arboard` + test double) |
//! | [`watch`] | Periodic clipboard polling loop |
//! | [`items`] | List, show, copy, add, delete, and bump commands |
//! | [`search`] | Fuzzy search command |
//! | [`stats`] | History statistics |

pub mod clipboard;
pub mod config;
pub mod db;
pub mod items;
pub mod migrate;
pub mod search;
pub mod sqlite_store;
pub mod stats;
pub mod watch;

pub use clipdex_core::history::HistoryStore;
pub use clipdex_core::models::HistoryItem;
