//! Command-line interface for timed_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timed_tictactoe::EngineEvent;

/// Timed Tic-Tac-Toe - two players, one board, ten seconds a turn
#[derive(Parser, Debug)]
#[command(name = "timed_tictactoe")]
#[command(about = "Tic-tac-toe with a per-turn countdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (overrides the config file)
    #[arg(long)]
    pub dimension: Option<usize>,

    /// Seconds per turn (overrides the config file)
    #[arg(long)]
    pub turn_seconds: Option<u32>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// Log file (the terminal is owned by the UI)
        #[arg(long, default_value = "timed_tictactoe.log")]
        log_file: PathBuf,
    },

    /// Replay a comma-separated event stream headlessly
    Script {
        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// Events: cell indices to place, `t` for a one-second tick
        #[arg(long, value_delimiter = ',', required = true)]
        events: Vec<EngineEvent>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_events_parsed() {
        let cli = Cli::try_parse_from(["timed_tictactoe", "script", "--events", "0,t,3"]).unwrap();
        match cli.command {
            Command::Script { events, json, .. } => {
                assert_eq!(
                    events,
                    vec![EngineEvent::Place(0), EngineEvent::Tick, EngineEvent::Place(3)]
                );
                assert!(!json);
            }
            other => panic!("Expected script command, got {:?}", other),
        }
    }

    #[test]
    fn test_script_rejects_unknown_event() {
        let result = Cli::try_parse_from(["timed_tictactoe", "script", "--events", "0,zz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_script_requires_events() {
        assert!(Cli::try_parse_from(["timed_tictactoe", "script"]).is_err());
    }

    #[test]
    fn test_tui_game_args() {
        let cli = Cli::try_parse_from([
            "timed_tictactoe",
            "tui",
            "--config",
            "game.toml",
            "--dimension",
            "4",
        ])
        .unwrap();
        match cli.command {
            Command::Tui { game, log_file } => {
                assert_eq!(game.config, Some(PathBuf::from("game.toml")));
                assert_eq!(game.dimension, Some(4));
                assert_eq!(game.turn_seconds, None);
                assert_eq!(log_file, PathBuf::from("timed_tictactoe.log"));
            }
            other => panic!("Expected tui command, got {:?}", other),
        }
    }
}
