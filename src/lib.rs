//! Noughts - two-player tic-tac-toe in the terminal.
//!
//! The game logic lives in [`noughts_tictactoe`]; this crate adds the
//! presentation layer and the ambient pieces around it.
//!
//! # Architecture
//!
//! - **tui**: terminal board that subscribes to the game's published views
//! - **replay**: applies a list of cell indices and reports the result
//! - **config**: display and logging settings from TOML
//! - **cli**: command-line entry points
//!
//! # Example
//!
//! ```
//! use noughts::replay;
//!
//! let report = replay(&[0, 3, 1, 4, 2]);
//! assert_eq!(report.view.status_line(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{ConfigError, Settings};
pub use noughts_tictactoe as tictactoe;
pub use replay::{Rejected, ReplayReport, replay};
