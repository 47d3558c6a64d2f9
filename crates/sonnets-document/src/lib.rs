//! Poem documents and corpus loading for sonnets.
//!
//! A [`Document`] is a titled poem made of ordered lines. Documents are loaded
//! once at startup, either from a JSON corpus file or from the corpus bundled
//! with the tool, and are never mutated afterwards.

#![warn(missing_docs)]

mod corpus;
mod error;

pub use corpus::{bundled_corpus, load_corpus, parse_corpus_str};
pub use error::DocumentError;
use serde::Deserialize;

/// A poem in the corpus.
///
/// Line numbers are 1-based and derived from the position in `lines`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Document {
    /// Poem title.
    pub title: String,
    /// Poem lines in order.
    pub lines: Vec<String>,
}

impl Document {
    /// Creates a document from a title and its lines.
    pub fn new(
        title: impl Into<String>,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Iterates over lines paired with their 1-based line numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("Sonnet 1", ["From fairest creatures", "That thereby"]);
        assert_eq!(doc.title, "Sonnet 1");
        assert_eq!(doc.lines.len(), 2);
    }

    #[test]
    fn test_numbered_lines_are_one_based() {
        let doc = Document::new("t", ["a", "b", "c"]);
        let numbered: Vec<_> = doc.numbered_lines().collect();
        assert_eq!(numbered, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("Untitled", Vec::<String>::new());
        assert_eq!(doc.numbered_lines().count(), 0);
    }
}
