//! Timed Tic-Tac-Toe library - board rules, turn countdown and session scoring
//!
//! # Architecture
//!
//! - **Engine**: synchronous state machine for board, turn, countdown, score
//! - **Rules**: pure win and draw checks for `N x N` boards
//! - **Session**: async single writer that drives the countdown and publishes snapshots
//! - **Config**: TOML game configuration
//!
//! # Example
//!
//! ```
//! use timed_tictactoe::{GameEngine, PlaceOutcome, Player};
//!
//! let mut engine = GameEngine::default();
//! engine.start_round();
//! let outcome = engine.place(4).unwrap();
//! assert_eq!(outcome, PlaceOutcome::Continue { next: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod script;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Theme};

// Crate-level exports - Session management
pub use session::{GameSession, TICK_INTERVAL};

// Crate-level exports - Headless runs
pub use script::{RejectedEvent, ScriptReport, run_script};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, DEFAULT_DIMENSION, EngineEvent, EngineSettings, EngineSnapshot, EventParseError,
    GameEngine, InvalidMove, MAX_DIMENSION, PlaceOutcome, Player, RoundPhase, RoundResult, Score,
    SettingsError, Square, TURN_SECONDS, TickOutcome, TurnToken, check_win, is_full,
};
