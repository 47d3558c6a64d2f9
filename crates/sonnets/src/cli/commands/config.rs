//! Implementation of `:config`.

use std::io::{self, Write};

use sonnets_highlight::Highlighter;

use super::Flow;
use crate::cli::context::SessionContext;

/// Shows the effective settings and where they are stored.
pub fn run(ctx: &SessionContext, out: &mut impl Write) -> io::Result<Flow> {
    writeln!(out, "# {}", ctx.config_path.display())?;
    let toml = ctx.config.to_toml();
    if ctx.config.highlight {
        write!(out, "{}", Highlighter::new().highlight_toml(&toml))?;
    } else {
        write!(out, "{toml}")?;
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use sonnets_document::bundled_corpus;

    use super::*;

    #[test]
    fn plain_settings_when_highlight_is_off() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = SessionContext::new(bundled_corpus(), dir.path().join("s.toml"));
        ctx.config.highlight = false;
        let mut out = Vec::new();

        run(&ctx, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("# "));
        assert!(out.contains("highlight = false"));
        assert!(out.contains("search_mode = \"AND\""));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn highlighted_settings_when_highlight_is_on() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = SessionContext::new(bundled_corpus(), dir.path().join("s.toml"));
        let mut out = Vec::new();

        run(&ctx, &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("\x1b["));
    }
}
