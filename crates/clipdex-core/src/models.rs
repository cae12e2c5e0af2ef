//! Core data models for Clipdex.
//!
//! A [`HistoryItem`] is one distinct piece of clipboard content together
//! with the metadata that drives ranking. Identity is content-derived:
//! two captures with equal content share a fingerprint and are the same
//! logical entry.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A single clipboard history entry.
///
/// `fingerprint` is the SHA-256 hex digest of `content` and acts as the
/// deduplication key: at most one live item exists per fingerprint.
/// `captured_at` is the first-seen time (Unix seconds) and never changes
/// on re-capture; `copy_count` tracks how many times the same content has
/// been re-committed and only moves through
/// [`HistoryStore::increment_count`](crate::history::HistoryStore::increment_count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub content: String,
    pub fingerprint: String,
    pub captured_at: i64,
    pub copy_count: i64,
}

impl HistoryItem {
    /// Create a fresh item for newly captured content.
    ///
    /// The fingerprint is computed from the content, `captured_at` is set
    /// to the current time, and `copy_count` starts at zero.
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            fingerprint: fingerprint(content),
            captured_at: Utc::now().timestamp(),
            copy_count: 0,
        }
    }
}

/// Compute the content fingerprint: lowercase SHA-256 hex of the raw bytes.
///
/// Pure function of the content — the same bytes always produce the same
/// digest, across calls and across process restarts.
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = fingerprint("hello world");
        let b = fingerprint("hello world");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn fingerprint_distinguishes_content() {
        assert_ne!(fingerprint("hello"), fingerprint("hello "));
        assert_ne!(fingerprint("hello"), fingerprint("Hello"));
    }

    #[test]
    fn fingerprint_of_empty_content() {
        // SHA-256 of the empty string is a well-known constant.
        assert_eq!(
            fingerprint(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn new_item_starts_with_zero_count() {
        let item = HistoryItem::new("some content");
        assert_eq!(item.copy_count, 0);
        assert_eq!(item.fingerprint, fingerprint("some content"));
        assert_eq!(item.content, "some content");
    }
}
