//! Free-text search over a corpus.
//!
//! Linear scan, case-insensitive substring match, OR across every field an
//! entry exposes through [`CorpusEntry::search_text`]. No ranking: results
//! keep corpus insertion order.

use std::sync::Arc;

use super::{Corpus, CorpusEntry};

/// Search a corpus (case-insensitive substring match).
///
/// An empty query matches every entry. The query is not trimmed, so a query
/// of spaces only matches text that contains those spaces.
pub fn search<'a, E: CorpusEntry>(corpus: &'a Corpus<E>, query: &str) -> Vec<&'a Arc<E>> {
    if query.is_empty() {
        return corpus.iter().collect();
    }

    let query_lower = query.to_lowercase();

    corpus
        .iter()
        .filter(|entry| matches(entry.as_ref(), &query_lower))
        .collect()
}

/// True when any searchable field of `entry` contains `query_lower`.
///
/// `query_lower` must already be lowercased.
pub fn matches<E: CorpusEntry>(entry: &E, query_lower: &str) -> bool {
    entry
        .search_text()
        .iter()
        .any(|text| text.to_lowercase().contains(query_lower))
}
