//! Search facade: ranked fuzzy filtering over history items.
//!
//! A pure transform per call — no state, no I/O. Items are scored with
//! [`fuzzy_score`], non-matches are dropped, and the survivors are sorted
//! by descending score. The sort is stable, so equal scores keep the
//! store's ranking order (copy count, then recency).

use crate::models::HistoryItem;
use crate::score::fuzzy_score;

/// An item paired with its match score, alive only for the duration of a
/// single search call.
struct ScoredCandidate<'a> {
    item: &'a HistoryItem,
    score: i64,
}

/// Filter and rank `items` against `query`.
///
/// Returns `None` for an empty query — the "no filter" signal, letting
/// callers distinguish "show everything" from `Some(vec![])`, which means
/// the query matched nothing. Scores are internal and not exposed.
pub fn search(items: &[HistoryItem], query: &str) -> Option<Vec<HistoryItem>> {
    if query.is_empty() {
        return None;
    }

    let mut matches: Vec<ScoredCandidate<'_>> = items
        .iter()
        .filter_map(|item| {
            let score = fuzzy_score(&item.content, query);
            (score > 0).then_some(ScoredCandidate { item, score })
        })
        .collect();

    // Stable sort: ties preserve the input (ranking) order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    Some(matches.into_iter().map(|c| c.item.clone()).collect())
}
