//! Clap argument definitions for the `sonnets` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "sonnets")]
#[command(about = "Interactive case-insensitive search over a corpus of poems")]
pub struct Cli {
    /// Settings file [default: ~/.sonnets.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Corpus file: a JSON array of {"title", "lines"} objects [default: bundled sonnets]
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Verbosity level for logs on stderr (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_paths_and_verbosity() {
        let cli = Cli::parse_from(["sonnets", "--config", "s.toml", "--corpus", "c.json", "-vv"]);
        assert_eq!(cli.config, Some(PathBuf::from("s.toml")));
        assert_eq!(cli.corpus, Some(PathBuf::from("c.json")));
        assert_eq!(cli.verbose, 2);
    }
}
