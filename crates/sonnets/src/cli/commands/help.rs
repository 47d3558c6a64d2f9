//! Implementation of `:help` and the startup banner.

use std::io::{self, Write};

use super::Flow;

/// Printed once when the session starts.
pub const BANNER: &str = "Sonnets: search a small corpus of poems
Type :help for commands. Type :quit to exit.";

/// Printed by `:help`.
pub const HELP: &str = "Commands:
  :help                   Show this help text
  :quit                   Exit the program
  :highlight on|off       Toggle highlighting of matches
  :search-mode AND|OR     Switch how multi-word queries combine
  :config                 Show the current settings

Usage:
  Enter one or more words to search. Examples:
    love
    summer day

Notes:
  - Case-insensitive search
  - Only matching sonnets are printed
  - AND mode: every word must occur; OR mode: any word may occur
";

/// Prints the help text.
pub fn run(out: &mut impl Write) -> io::Result<Flow> {
    writeln!(out, "{HELP}")?;
    Ok(Flow::Continue)
}
