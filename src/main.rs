//! Noughts - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{Settings, logging, replay, tui};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => run_play(config, log_file),
        Command::Replay { json, moves } => run_replay(&moves, json),
    }
}

/// Run the interactive terminal game
fn run_play(config: Option<PathBuf>, log_file: Option<PathBuf>) -> Result<()> {
    let mut settings = Settings::load(config.as_deref()).context("Failed to load settings")?;
    if let Some(log_file) = log_file {
        settings = settings.with_log_file(log_file);
    }
    tui::run_tui(&settings)
}

/// Replay moves and print the final board
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    logging::init_stderr();
    info!(count = moves.len(), "Replaying moves");

    let report = replay(moves);
    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
