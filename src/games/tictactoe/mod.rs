mod action;
mod engine;
mod phases;
pub mod rules;
mod types;

pub use action::{
    EngineEvent, EventParseError, InvalidMove, PlaceOutcome, SettingsError, TickOutcome,
};
pub use engine::{
    DEFAULT_DIMENSION, EngineSettings, EngineSnapshot, GameEngine, MAX_DIMENSION, Score,
    TURN_SECONDS,
};
pub use phases::{RoundPhase, RoundResult, TurnToken};
pub use rules::{check_win, is_full};
pub use types::{Board, Player, Square};
