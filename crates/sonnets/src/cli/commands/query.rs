//! Free-text queries.

use std::io::{self, Write};

use sonnets_query::search_all;

use super::Flow;
use crate::cli::{context::SessionContext, output::write_results};

/// Searches the corpus and prints the results.
pub fn run(ctx: &SessionContext, query: &str, out: &mut impl Write) -> io::Result<Flow> {
    let results = search_all(&ctx.corpus, query, &ctx.config);
    write_results(out, query, &results, ctx.config.highlight)?;
    Ok(Flow::Continue)
}
