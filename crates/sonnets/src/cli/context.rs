//! Session state for the interactive loop.

use std::{path::PathBuf, process::ExitCode};

use sonnets_config::{SearchConfig, load_config, resolve_config_path, save_config};
use sonnets_document::{Document, bundled_corpus, load_corpus};
use sonnets_highlight::warning;
use tracing::info;

use super::args::Cli;

/// State owned by one interactive session.
///
/// The corpus is read-only after loading. The settings are the only mutable
/// state and are written back to `config_path` after every change.
pub struct SessionContext {
    /// Documents to search.
    pub corpus: Vec<Document>,
    /// Current settings.
    pub config: SearchConfig,
    /// Where settings are persisted.
    pub config_path: PathBuf,
}

impl SessionContext {
    /// Loads the corpus and settings named by the command line.
    pub fn load(cli: &Cli) -> Result<Self, ExitCode> {
        let corpus = match &cli.corpus {
            Some(path) => load_corpus(path).map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            })?,
            None => bundled_corpus(),
        };

        Ok(Self::new(corpus, resolve_config_path(cli.config.clone())))
    }

    /// Creates a session over `corpus`, loading settings from `config_path`.
    pub fn new(corpus: Vec<Document>, config_path: PathBuf) -> Self {
        let config = load_config(&config_path);
        info!(
            documents = corpus.len(),
            config = %config_path.display(),
            "session ready"
        );
        Self {
            corpus,
            config,
            config_path,
        }
    }

    /// Writes the current settings, warning on stderr if that fails.
    pub fn persist_config(&self) {
        if let Err(e) = save_config(&self.config_path, &self.config) {
            eprintln!("{}", warning(&format!("warning: could not save settings: {e}")));
        }
    }
}
