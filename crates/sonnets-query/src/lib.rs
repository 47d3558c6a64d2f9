//! Substring search and multi-word result merging for sonnets.
//!
//! Searching is plain case-insensitive substring matching; overlapping
//! occurrences all count. A query is split on whitespace and every word is
//! searched independently, then the per-word results are folded together
//! according to the [`SearchMode`](sonnets_config::SearchMode):
//!
//! - **AND**: a document matches only if every word matched it.
//! - **OR**: a document matches if any word matched it.
//!
//! # Example
//!
//! ```
//! use sonnets_config::SearchConfig;
//! use sonnets_document::Document;
//! use sonnets_query::search_all;
//!
//! let docs = vec![Document::new("Sonnet 18", ["Shall I compare thee to a summer's day?"])];
//! let results = search_all(&docs, "summer day", &SearchConfig::default());
//! assert_eq!(results[0].matches, 2);
//! ```

#![warn(missing_docs)]

mod engine;
mod result;
mod search;
mod span;

pub use engine::search_all;
pub use result::{DocumentSearchResult, LineMatch};
pub use search::search_document;
pub use span::{Span, find_spans, fold_case};
