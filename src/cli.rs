//! Command-line interface for strictly_confetti.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Confetti - tic-tac-toe with fireworks
#[derive(Parser, Debug)]
#[command(name = "strictly_confetti")]
#[command(about = "Tic-tac-toe in the terminal, with a celebration for the winner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used when absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start straight into a mode: "player" or "computer"
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Seed for the computer opponent and the celebration
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs while the UI owns the terminal
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
