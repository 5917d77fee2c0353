//! Rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rewind::{RewindConfig, Session};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The configured filter is not known yet; config loading logs under RUST_LOG only.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || load_config(&cli))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(script = ?cli.script, "Starting rewind");

    let mut session = Session::new(config);
    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), io::stdout().lock())?;
        }
        None => session.run(io::stdin().lock(), io::stdout().lock())?,
    }

    let game = session.game();
    info!(
        status = %game.status().status_line(),
        snapshots = game.history().len(),
        "Exiting"
    );
    Ok(())
}

/// Reads the config file, if any, then applies the display flags on top.
#[instrument(skip(cli), fields(config = ?cli.config))]
fn load_config(cli: &Cli) -> Result<RewindConfig> {
    let mut config = match &cli.config {
        Some(path) => RewindConfig::from_file(path)?,
        None => RewindConfig::default(),
    };
    if cli.plain {
        config = config.with_symbols("X", "O");
    }
    if cli.no_history {
        config = config.with_show_history(false);
    }
    Ok(config)
}
