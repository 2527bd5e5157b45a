//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML settings file (defaults to ./noughts.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log file, overriding the settings file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply cell indices (0-8, row-major) to a new game and print the result
    Replay {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices, X first
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}
