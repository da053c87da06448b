//! Engine inputs and their outcomes.
//!
//! The engine consumes an ordered stream of [`EngineEvent`]s; each event is
//! either a one-second tick or a placement request.

use super::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One input to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineEvent {
    /// One second of the current turn elapsed.
    Tick,
    /// Current player places a mark at the cell index.
    Place(usize),
}

impl FromStr for EngineEvent {
    type Err = EventParseError;

    /// Parses `t`/`tick` as a tick and a bare number as a placement.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("t") || token.eq_ignore_ascii_case("tick") {
            return Ok(EngineEvent::Tick);
        }
        token
            .parse::<usize>()
            .map(EngineEvent::Place)
            .map_err(|_| EventParseError {
                input: token.to_string(),
            })
    }
}

/// Unrecognized event token.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized event '{}' (expected a cell index or 't')", input)]
pub struct EventParseError {
    /// The offending token.
    #[error(not(source))]
    pub input: String,
}

/// Placement rejected by the engine. State is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Index lies outside the board.
    #[display("Cell {} is out of bounds (board has {} cells)", index, cells)]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// No round is running.
    #[display("No round is active")]
    RoundInactive,
}

/// Engine parameters out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SettingsError {
    /// Board side length is zero or above the supported maximum.
    #[display("Board dimension must be between 1 and {}, got {}", max, dimension)]
    DimensionOutOfRange {
        /// Requested side length.
        dimension: usize,
        /// Largest supported side length.
        max: usize,
    },

    /// Turns must last at least one second.
    #[display("Turn seconds must be at least 1")]
    ZeroTurnSeconds,
}

/// What a successful placement led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// Round continues with the next player.
    Continue {
        /// Player now on turn.
        next: Player,
    },
    /// Placement completed a line.
    Won(Player),
    /// Placement filled the board with no line.
    Draw,
}

/// What a tick led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// No round active; nothing changed.
    Idle,
    /// Tick was armed for a turn that has already ended; nothing changed.
    Stale,
    /// Countdown decremented.
    Counting {
        /// Seconds left in the turn.
        remaining: u32,
    },
    /// Countdown expired and the turn passed without a placement.
    TimedOut {
        /// Player now on turn.
        next: Player,
    },
}
