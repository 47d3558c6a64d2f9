//! sonnets: interactive search over a corpus of poems.
//!
//! Users type one or more words and see, per poem, where those words occur.
//! Matching is case-insensitive substring search. Multi-word queries combine in
//! AND or OR mode, and matches can be highlighted in the terminal. Settings
//! persist between sessions in `~/.sonnets.toml`.

#![warn(missing_docs)]

pub mod cli;
