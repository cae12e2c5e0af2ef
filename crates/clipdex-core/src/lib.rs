//! # Clipdex Core
//!
//! Shared logic for Clipdex: the history data model, content
//! fingerprinting, the fuzzy subsequence scorer, the search facade,
//! the storage backend trait, and the history store itself.
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or other
//! native-only dependencies. Durable storage is abstracted behind the
//! [`store::HistoryBackend`] trait so that the SQLite backend (in the
//! `clipdex` application crate) and the in-memory backend (for tests)
//! are interchangeable.

pub mod history;
pub mod models;
pub mod score;
pub mod search;
pub mod store;
