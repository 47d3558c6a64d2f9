//! Rendering of query results.

use std::io::{self, Write};

use sonnets_highlight::highlight_matches;
use sonnets_query::{DocumentSearchResult, Span};

/// Writes the summary line and every matching document.
///
/// The summary counts matching documents against the whole corpus and quotes
/// the query exactly as typed. Documents with zero matches are not listed.
pub fn write_results(
    out: &mut impl Write,
    query: &str,
    results: &[DocumentSearchResult],
    highlight: bool,
) -> io::Result<()> {
    let total = results.len();
    let matched: Vec<&DocumentSearchResult> = results.iter().filter(|r| r.is_match()).collect();
    writeln!(
        out,
        "{} out of {total} sonnets contain \"{query}\".",
        matched.len()
    )?;

    for (idx, result) in matched.iter().enumerate() {
        let title = render(&result.title, &result.title_spans, highlight);
        writeln!(out)?;
        writeln!(out, "[{}/{total}] {title}", idx + 1)?;
        for lm in &result.line_matches {
            let line = render(&lm.text, &lm.spans, highlight);
            writeln!(out, "  [{:2}] {line}", lm.line_no)?;
        }
    }

    Ok(())
}

/// Returns `text`, with its spans highlighted if enabled.
fn render(text: &str, spans: &[Span], highlight: bool) -> String {
    if highlight {
        highlight_matches(text, spans.iter().map(Span::range))
    } else {
        text.to_string()
    }
}
