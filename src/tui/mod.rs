//! Terminal UI for Timed Tic-Tac-Toe

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use timed_tictactoe::{EngineSnapshot, GameConfig, GameSession, PlaceOutcome};
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

use app::{Action, App};

/// Run the TUI client
pub async fn run_tui(config: GameConfig, log_file: &Path) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?config, "Starting Timed Tic-Tac-Toe TUI");

    let session = GameSession::with_tick_interval(config.engine_settings()?, config.tick_interval());
    let mut updates = session.subscribe();
    let app = App::new(updates.borrow().clone(), *config.theme());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &session, &mut updates).await;

    session.stop_session().await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Draws, reads keys and relays actions to the session until the user quits.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    session: &GameSession,
    updates: &mut watch::Receiver<EngineSnapshot>,
) -> Result<()> {
    loop {
        if updates.has_changed()? {
            app.update(updates.borrow_and_update().clone());
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        // Short poll keeps the countdown display fresh
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = app.handle_key(key.code) else {
            continue;
        };

        match action {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::StartGame | Action::RestartRound => {
                session.start_round().await;
                app.set_status("Round started. Player X's turn.");
            }
            Action::StopGame => {
                session.stop_session().await;
            }
            Action::Place(index) => match session.place(index).await {
                Ok(PlaceOutcome::Continue { next }) => {
                    app.set_status(format!("Player {}'s turn", next));
                }
                Ok(PlaceOutcome::Won(player)) => {
                    app.set_status(format!("Player {} wins the round", player));
                }
                Ok(PlaceOutcome::Draw) => app.set_status("Round drawn"),
                Err(e) => {
                    warn!(error = %e, "Move failed");
                    app.set_status(e.to_string());
                }
            },
        }
    }
}
