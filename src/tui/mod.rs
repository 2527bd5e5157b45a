//! Terminal UI: the presentation layer for a local two-player game.

pub mod app;
pub mod input;
pub mod ui;

use crate::config::Settings;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

pub use app::App;
pub use input::Action;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs an interactive game until the user quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    crate::logging::init_file(settings.log_file())?;
    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let res = match setup() {
        Ok(mut terminal) => {
            let res = run_app(&mut terminal, settings);
            keep_first_error(res, restore(Some(&mut terminal)))
        }
        Err(err) => keep_first_error(Err(err), restore(None)),
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn setup() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Puts the terminal back the way the shell expects it.
///
/// Every step runs even if an earlier one fails; the first failure is
/// returned.
fn restore(terminal: Option<&mut Tui>) -> Result<()> {
    let raw = disable_raw_mode().map_err(anyhow::Error::from);
    let screen = match terminal {
        Some(terminal) => {
            let screen = execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )
            .map_err(anyhow::Error::from);
            keep_first_error(screen, terminal.show_cursor().map_err(anyhow::Error::from))
        }
        None => execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
            .map_err(anyhow::Error::from),
    };
    keep_first_error(raw, screen)
}

/// Returns `first` if it failed, otherwise `second`.
fn keep_first_error(first: Result<()>, second: Result<()>) -> Result<()> {
    if first.is_err()
        && let Err(err) = &second
    {
        warn!(error = ?err, "Terminal restore failed after an earlier error");
    }
    first.and(second)
}

/// Draw, then wait briefly for one input event; repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, settings: &Settings) -> Result<()> {
    let mut app = App::new();

    loop {
        app.sync();

        let mut areas = [Rect::default(); 9];
        terminal.draw(|f| areas = ui::draw(f, &app, settings))?;
        app.set_cell_areas(areas);

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = input::action_for_key(key) {
                        app.handle(action);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.click(mouse.column, mouse.row);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let res = keep_first_error(Err(anyhow!("loop")), Err(anyhow!("restore")));
        assert_eq!(res.unwrap_err().to_string(), "loop");
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_loop() {
        let res = keep_first_error(Ok(()), Err(anyhow!("restore")));
        assert_eq!(res.unwrap_err().to_string(), "restore");
    }

    #[test]
    fn test_both_ok() {
        assert!(keep_first_error(Ok(()), Ok(())).is_ok());
    }
}
