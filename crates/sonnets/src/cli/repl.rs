//! The read-eval-print loop.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::{
    commands::{self, Flow, Input, help::BANNER},
    context::SessionContext,
};

/// Prompt printed before each line of input.
pub const PROMPT: &str = "> ";

/// Runs the interactive session until `:quit` or end of input.
pub fn run(
    ctx: &mut SessionContext,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out)?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "Bye.")?;
            break;
        }

        let parsed = Input::parse(&line);
        debug!(?parsed, "read input");
        if commands::run(parsed, ctx, out)? == Flow::Quit {
            break;
        }
    }

    out.flush()
}
