//! Per-document search results and their merge.

use std::collections::{BTreeMap, btree_map::Entry};

use sonnets_document::Document;

use crate::Span;

/// Matches on one line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line number.
    pub line_no: usize,
    /// The original line text.
    pub text: String,
    /// Match spans within the line, sorted. Never empty.
    pub spans: Vec<Span>,
}

/// The outcome of searching one document for one or more query words.
///
/// `matches` counts raw occurrences across the title and all lines. A
/// document disqualified in AND mode keeps its spans but reports zero matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSearchResult {
    /// The document title.
    pub title: String,
    /// Match spans within the title, sorted.
    pub title_spans: Vec<Span>,
    /// Matching lines in ascending line order, at most one entry per line.
    pub line_matches: Vec<LineMatch>,
    /// Total number of occurrences.
    pub matches: usize,
}

impl DocumentSearchResult {
    /// Creates a result with no matches for `document`.
    pub fn empty(document: &Document) -> Self {
        Self {
            title: document.title.clone(),
            title_spans: Vec::new(),
            line_matches: Vec::new(),
            matches: 0,
        }
    }

    /// Returns true if the document counts as a match.
    pub fn is_match(&self) -> bool {
        self.matches > 0
    }

    /// Marks the document as non-matching while keeping its spans.
    pub fn disqualify(&mut self) {
        self.matches = 0;
    }

    /// Merges the results of two searches over the same document.
    ///
    /// Match counts add up, title spans are concatenated and sorted, and line
    /// matches are unioned by line number. The result does not depend on
    /// argument order.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        let mut title_spans = self.title_spans;
        title_spans.extend(other.title_spans);
        title_spans.sort_unstable();

        let mut lines: BTreeMap<usize, LineMatch> = self
            .line_matches
            .into_iter()
            .map(|lm| (lm.line_no, lm))
            .collect();

        for lm in other.line_matches {
            match lines.entry(lm.line_no) {
                Entry::Occupied(mut entry) => {
                    let spans = &mut entry.get_mut().spans;
                    spans.extend(lm.spans);
                    spans.sort_unstable();
                }
                Entry::Vacant(entry) => {
                    entry.insert(lm);
                }
            }
        }

        Self {
            title: self.title,
            title_spans,
            line_matches: lines.into_values().collect(),
            matches: self.matches + other.matches,
        }
    }
}
