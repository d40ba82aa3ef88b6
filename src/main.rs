//! Strictly Confetti - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::str::FromStr;
use std::sync::Arc;
use strictly_confetti::{AppConfig, GameMode, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_seed(cli.seed)
    .with_log_file(cli.log_file);

    let mode = match cli.mode.as_deref() {
        Some(name) => GameMode::from_str(name)
            .with_context(|| format!("Unknown mode '{}', expected 'player' or 'computer'", name))?,
        None => GameMode::None,
    };

    init_logging(&config)?;
    info!(?mode, seed = ?config.game().seed(), "Starting Strictly Confetti");

    tui::run_tui(&config, mode).await
}

/// Logs to a file so tracing output never lands on the game screen.
fn init_logging(config: &AppConfig) -> Result<()> {
    let path = config.display().log_file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
