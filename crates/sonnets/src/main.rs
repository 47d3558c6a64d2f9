//! Command-line entry point for the `sonnets` search tool.

use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use clap::Parser;
use sonnets::cli::{SessionContext, args::Cli, repl};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive.
const LOG_ENV: &str = "SONNETS_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = match SessionContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    match repl::run(&mut ctx, &mut stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr log subscriber; stdout is reserved for the session.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
