//! Command parsing and dispatch for the interactive loop.

pub mod config;
pub mod help;
pub mod query;
pub mod settings;

use std::io::{self, Write};

use sonnets_config::SearchMode;

use super::context::SessionContext;

/// Prefix that distinguishes commands from queries.
pub const COMMAND_PREFIX: char = ':';

/// What the loop should do after handling one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// End the session.
    Quit,
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line.
    Empty,
    /// A `:`-prefixed command.
    Command(Command),
    /// Free-text query.
    Query(String),
}

/// Interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `:help`
    Help,
    /// `:quit`
    Quit,
    /// `:highlight on|off`; `None` when the argument is missing or invalid.
    Highlight(Option<bool>),
    /// `:search-mode AND|OR`; `None` when the argument is missing or invalid.
    SearchMode(Option<SearchMode>),
    /// `:config`
    Config,
    /// Any other `:`-prefixed input.
    Unknown,
}

impl Input {
    /// Parses one line of user input.
    pub fn parse(line: &str) -> Self {
        let raw = line.trim();
        if raw.is_empty() {
            Self::Empty
        } else if raw.starts_with(COMMAND_PREFIX) {
            Self::Command(Command::parse(raw))
        } else {
            Self::Query(raw.to_string())
        }
    }
}

impl Command {
    /// Parses a trimmed, `:`-prefixed command line.
    fn parse(raw: &str) -> Self {
        match raw {
            ":quit" => return Self::Quit,
            ":help" => return Self::Help,
            ":config" => return Self::Config,
            _ => {}
        }

        if raw.starts_with(":highlight") {
            let arg = single_argument(raw).and_then(|arg| {
                if arg.eq_ignore_ascii_case("on") {
                    Some(true)
                } else if arg.eq_ignore_ascii_case("off") {
                    Some(false)
                } else {
                    None
                }
            });
            return Self::Highlight(arg);
        }

        if raw.starts_with(":search-mode") {
            return Self::SearchMode(single_argument(raw).and_then(|arg| arg.parse().ok()));
        }

        Self::Unknown
    }
}

/// Returns the argument of a command that takes exactly one.
fn single_argument(raw: &str) -> Option<&str> {
    let mut parts = raw.split_whitespace().skip(1);
    match (parts.next(), parts.next()) {
        (Some(arg), None) => Some(arg),
        _ => None,
    }
}

/// Handles one line of input.
pub fn run(input: Input, ctx: &mut SessionContext, out: &mut impl Write) -> io::Result<Flow> {
    match input {
        Input::Empty => Ok(Flow::Continue),
        Input::Query(query) => query::run(ctx, &query, out),
        Input::Command(Command::Quit) => {
            writeln!(out, "Bye.")?;
            Ok(Flow::Quit)
        }
        Input::Command(Command::Help) => help::run(out),
        Input::Command(Command::Highlight(arg)) => settings::highlight(ctx, arg, out),
        Input::Command(Command::SearchMode(arg)) => settings::search_mode(ctx, arg, out),
        Input::Command(Command::Config) => config::run(ctx, out),
        Input::Command(Command::Unknown) => {
            writeln!(out, "Unknown command. Type :help for commands.")?;
            Ok(Flow::Continue)
        }
    }
}
