//! Timed Tic-Tac-Toe - Unified CLI
//!
//! Terminal game and headless event replay.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use timed_tictactoe::{EngineEvent, GameConfig, ScriptReport, run_script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tui { game, log_file } => {
            let config = load_config(&game)?;
            tui::run_tui(config, &log_file).await
        }
        Command::Script { game, events, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            let config = load_config(&game)?;
            run_script_command(config, &events, json)
        }
    }
}

/// Reads the config file, if any, and applies command-line overrides.
fn load_config(args: &GameArgs) -> Result<GameConfig> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_dimension(args.dimension)
    .with_turn_seconds(args.turn_seconds);
    config.validate()?;
    Ok(config)
}

/// Replays the events and prints the final state
#[instrument(skip_all, fields(event_count = events.len()))]
fn run_script_command(config: GameConfig, events: &[EngineEvent], json: bool) -> Result<()> {
    let report = run_script(config.engine_settings()?, events);
    info!(rejected = report.rejected.len(), "Script complete");
    print!("{}", render_report(&report, json)?);
    Ok(())
}

/// Formats a script report as text or pretty JSON.
fn render_report(report: &ScriptReport, json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(report)?));
    }

    let snapshot = &report.snapshot;
    let mut out = format!("{}\n\n", snapshot.board().display());
    match snapshot.round_result() {
        Some(result) => out.push_str(&format!("{}\n", result)),
        None => out.push_str(&format!(
            "Player {} to move, {} s left\n",
            snapshot.current_player(),
            snapshot.countdown()
        )),
    }
    out.push_str(&format!(
        "Score - X: {} | O: {}\n",
        snapshot.score().x,
        snapshot.score().o
    ));
    for rejected in &report.rejected {
        out.push_str(&format!(
            "Rejected event #{} ({:?}): {}\n",
            rejected.position, rejected.event, rejected.reason
        ));
    }
    Ok(out)
}
