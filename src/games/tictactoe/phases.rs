//! Round lifecycle types.
//!
//! A round moves `NotStarted -> Active -> Ended(result)`. From `Ended` only a
//! new round or a session stop is accepted.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Player completed a line.
    Win(Player),
    /// Board filled with no line.
    Draw,
}

impl RoundResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundResult::Win(player) => Some(*player),
            RoundResult::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundResult::Draw)
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Win(player) => write!(f, "Player {} wins!", player),
            RoundResult::Draw => write!(f, "Draw!"),
        }
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round running; the session has not started or was stopped.
    #[default]
    NotStarted,
    /// Round in progress, placements and ticks accepted.
    Active,
    /// Round finished with a result.
    Ended(RoundResult),
}

impl RoundPhase {
    /// True while placements are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, RoundPhase::Active)
    }

    /// The result of an ended round.
    pub fn result(&self) -> Option<RoundResult> {
        match self {
            RoundPhase::Ended(result) => Some(*result),
            _ => None,
        }
    }
}

/// Identity of a single turn.
///
/// Bumped every time a turn ends, so a timer armed for an older token can
/// tell that its turn is already over.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct TurnToken(u64);

impl TurnToken {
    /// The token of the following turn.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
