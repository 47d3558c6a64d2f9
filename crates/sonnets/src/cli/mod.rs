//! CLI support for the `sonnets` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;
pub mod repl;

pub use context::SessionContext;
