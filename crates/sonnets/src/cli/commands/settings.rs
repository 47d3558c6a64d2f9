//! Implementation of `:highlight` and `:search-mode`.
//!
//! Both commands persist the settings immediately after changing them.

use std::io::{self, Write};

use sonnets_config::SearchMode;

use super::Flow;
use crate::cli::context::SessionContext;

/// Sets highlighting on or off, or prints usage.
pub fn highlight(
    ctx: &mut SessionContext,
    arg: Option<bool>,
    out: &mut impl Write,
) -> io::Result<Flow> {
    let Some(enabled) = arg else {
        writeln!(out, "Usage: :highlight on|off")?;
        return Ok(Flow::Continue);
    };

    ctx.config.highlight = enabled;
    writeln!(out, "Highlighting {}", if enabled { "ON" } else { "OFF" })?;
    ctx.persist_config();
    Ok(Flow::Continue)
}

/// Sets the search mode, or prints usage.
pub fn search_mode(
    ctx: &mut SessionContext,
    arg: Option<SearchMode>,
    out: &mut impl Write,
) -> io::Result<Flow> {
    let Some(mode) = arg else {
        writeln!(out, "Usage: :search-mode AND|OR")?;
        return Ok(Flow::Continue);
    };

    ctx.config.search_mode = mode;
    writeln!(out, "Search mode set to {mode}")?;
    ctx.persist_config();
    Ok(Flow::Continue)
}
