//! Match highlighting and terminal colors for sonnets.
//!
//! [`highlight_matches`] marks matched byte ranges of a line with ANSI bold and
//! yellow background. [`Highlighter`] syntax-highlights the settings display.

#![warn(missing_docs)]

mod ranges;

use std::ops::Range;

pub use ranges::merge_ranges;
use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// ANSI color codes for terminal output.
pub mod colors {
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Marker emitted before each highlighted run: bold plus yellow background.
pub const MATCH_START: &str = "\x1b[1m\x1b[43m";

/// Marker emitted after each highlighted run.
pub const MATCH_END: &str = colors::RESET;

/// Wraps every matched region of `text` in [`MATCH_START`] / [`MATCH_END`].
///
/// Overlapping and adjacent spans are coalesced first, so each marked run is
/// emitted once. With no spans the text is returned unchanged. Spans that fall
/// outside `text` or off a character boundary are skipped.
pub fn highlight_matches(text: &str, spans: impl IntoIterator<Item = Range<usize>>) -> String {
    let merged = merge_ranges(spans);
    if merged.is_empty() {
        return text.to_string();
    }

    let marker_len = MATCH_START.len() + MATCH_END.len();
    let mut out = String::with_capacity(text.len() + merged.len() * marker_len);
    let mut pos = 0;
    for span in merged {
        let Some(marked) = text.get(span.clone()) else {
            continue;
        };
        out.push_str(&text[pos..span.start]);
        out.push_str(MATCH_START);
        out.push_str(marked);
        out.push_str(MATCH_END);
        pos = span.end;
    }
    out.push_str(&text[pos..]);
    out
}

/// A syntax highlighter that can highlight code for terminal output.
pub struct Highlighter {
    /// The syntax set containing language definitions (including TOML).
    syntax_set: SyntaxSet,
    /// The theme set containing color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The theme to use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a new highlighter with the default theme (Dracula).
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content for terminal output.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights content with the specified syntax for terminal output.
    ///
    /// If the syntax is not found, the content is highlighted as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}
