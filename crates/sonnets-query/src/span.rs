//! Match spans and case-insensitive substring scanning.

use std::ops::Range;

/// A half-open byte range marking one match occurrence.
///
/// Offsets index the case-folded text, which has the same byte layout as the
/// original (see [`fold_case`]), so spans always land on character boundaries
/// of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the span as a byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Lowercases `text` without changing its byte layout.
///
/// A character whose lowercase form is not a single character of the same
/// UTF-8 width is kept as is.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
                _ => c,
            }
        })
        .collect()
}

/// Finds every occurrence of `pattern` in `text`, overlapping ones included.
///
/// Both arguments must already be case-folded. An empty pattern, or one longer
/// than the text, matches nothing.
pub fn find_spans(text: &str, pattern: &str) -> Vec<Span> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.char_indices()
        .filter(|&(i, _)| text[i..].starts_with(pattern))
        .map(|(i, _)| Span::new(i, i + pattern.len()))
        .collect()
}
