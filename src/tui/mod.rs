//! Terminal front end.
//!
//! Implements the render seams with ratatui and drives the two scheduling
//! points: the frame interval and the deferred computer move.

mod app;
mod input;
mod ui;
mod view;

pub use app::App;
pub use view::TerminalView;

use crate::config::AppConfig;
use crate::games::tictactoe::GameMode;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval, sleep_until};
use tracing::{error, info, instrument};

/// Runs the terminal game until the user quits.
#[instrument(skip(config))]
pub async fn run_tui(config: &AppConfig, mode: GameMode) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, config, mode).await;

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &AppConfig,
    mode: GameMode,
) -> Result<()> {
    let mut app = App::new(config, terminal.size()?);
    if mode.is_set() {
        app.set_mode(mode);
    }

    let mut frames = interval(config.display().frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit() {
        let due = app.computer_due();
        tokio::select! {
            _ = frames.tick() => {
                app.tick(terminal.size()?);
                terminal.draw(|f| ui::draw(f, &app))?;
                while event::poll(Duration::ZERO)? {
                    if let Event::Key(key) = event::read()?
                        && key.kind == KeyEventKind::Press
                    {
                        app.handle_key(key.code);
                    }
                }
            }
            _ = sleep_until(due.unwrap_or_else(Instant::now)), if due.is_some() => {
                app.run_computer_move();
            }
        }
    }

    info!("User quit");
    Ok(())
}
