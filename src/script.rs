//! Headless replay of an ordered event stream.

use crate::games::tictactoe::{EngineEvent, EngineSettings, EngineSnapshot, GameEngine, InvalidMove};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// An event the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEvent {
    /// Position of the event in the stream.
    pub position: usize,
    /// The event itself.
    pub event: EngineEvent,
    /// Why it was refused.
    pub reason: String,
}

/// Final state after a script run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Engine state after the last event.
    pub snapshot: EngineSnapshot,
    /// Events that were refused, in order.
    pub rejected: Vec<RejectedEvent>,
}

/// Starts a round on a fresh engine and applies `events` in order.
///
/// Refused placements are recorded and skipped; they never stop the run.
#[instrument(skip(events), fields(event_count = events.len()))]
pub fn run_script(settings: EngineSettings, events: &[EngineEvent]) -> ScriptReport {
    let mut engine = GameEngine::new(settings);
    engine.start_round();

    let mut rejected = Vec::new();
    for (position, event) in events.iter().copied().enumerate() {
        if let Err(reason) = engine.apply(event) {
            warn!(position, ?event, error = %reason, "Event rejected");
            rejected.push(reject(position, event, reason));
        }
    }

    info!(phase = ?engine.phase(), "Script finished");
    ScriptReport {
        snapshot: engine.snapshot(),
        rejected,
    }
}

fn reject(position: usize, event: EngineEvent, reason: InvalidMove) -> RejectedEvent {
    RejectedEvent {
        position,
        event,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, RoundResult};

    #[test]
    fn test_script_win() {
        let events: Vec<EngineEvent> = [0, 1, 3, 2, 6].into_iter().map(EngineEvent::Place).collect();
        let report = run_script(EngineSettings::default(), &events);
        assert_eq!(report.snapshot.round_result(), Some(RoundResult::Win(Player::X)));
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_script_records_rejections() {
        let events = [EngineEvent::Place(4), EngineEvent::Place(4), EngineEvent::Tick];
        let report = run_script(EngineSettings::default(), &events);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].position, 1);
        assert_eq!(*report.snapshot.countdown(), 9);
        assert_eq!(*report.snapshot.current_player(), Player::O);
    }
}
