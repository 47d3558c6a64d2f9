//! Multi-word query evaluation across the corpus.
//!
//! Each word of the query is searched on its own. The per-word result for a
//! document is then folded into that document's running result:
//!
//! - **AND**: merged only if both the running result and the word's result
//!   match. Otherwise the running result is disqualified and stays that way for
//!   the rest of the query, even if later words match.
//! - **OR**: always merged.

use sonnets_config::{SearchConfig, SearchMode};
use sonnets_document::Document;
use tracing::debug;

use crate::{DocumentSearchResult, search_document};

/// Evaluates `query` against every document.
///
/// Returns one result per document, in the same order as `documents`,
/// including documents with no matches. An empty query yields all-empty
/// results.
pub fn search_all(
    documents: &[Document],
    query: &str,
    config: &SearchConfig,
) -> Vec<DocumentSearchResult> {
    let mut words = query.split_whitespace();
    let Some(first) = words.next() else {
        return documents.iter().map(DocumentSearchResult::empty).collect();
    };

    let mut results: Vec<DocumentSearchResult> = documents
        .iter()
        .map(|doc| search_document(doc, first))
        .collect();

    for word in words {
        results = results
            .into_iter()
            .zip(documents)
            .map(|(running, doc)| {
                fold_word(running, search_document(doc, word), config.search_mode)
            })
            .collect();
    }

    debug!(
        query,
        mode = %config.search_mode,
        matched = results.iter().filter(|r| r.is_match()).count(),
        total = results.len(),
        "evaluated query"
    );
    results
}

/// Folds one word's result into a document's running result.
fn fold_word(
    mut running: DocumentSearchResult,
    word: DocumentSearchResult,
    mode: SearchMode,
) -> DocumentSearchResult {
    match mode {
        SearchMode::And if running.is_match() && word.is_match() => running.combine(word),
        SearchMode::And => {
            running.disqualify();
            running
        }
        SearchMode::Or => running.combine(word),
    }
}
