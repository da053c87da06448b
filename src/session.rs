//! Timer-driven game session.
//!
//! [`GameSession`] is the single writer of a [`GameEngine`]. It runs the turn
//! countdown on a tokio task and publishes an [`EngineSnapshot`] after every
//! change so presentation layers can render without touching the engine.

use crate::games::tictactoe::{
    EngineSettings, EngineSnapshot, GameEngine, InvalidMove, PlaceOutcome, TickOutcome,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Default length of one countdown tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// State shared between the session and its timer task.
struct Shared {
    engine: Mutex<GameEngine>,
    updates: watch::Sender<EngineSnapshot>,
    turn_changed: Notify,
}

impl Shared {
    fn publish(&self, engine: &GameEngine) {
        self.updates.send_replace(engine.snapshot());
    }
}

/// Handle to the running turn timer. Aborts the task on drop.
struct TurnTimer {
    task: JoinHandle<()>,
}

impl TurnTimer {
    fn spawn(shared: Arc<Shared>, interval: Duration) -> Self {
        Self {
            task: tokio::spawn(run_turn_timer(shared, interval)),
        }
    }
}

impl Drop for TurnTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A game session: one engine, one timer, any number of observers.
pub struct GameSession {
    shared: Arc<Shared>,
    tick_interval: Duration,
    timer: Mutex<Option<TurnTimer>>,
}

impl GameSession {
    /// Creates a session with a one-second tick.
    pub fn new(settings: EngineSettings) -> Self {
        Self::with_tick_interval(settings, TICK_INTERVAL)
    }

    /// Creates a session with a custom tick length.
    #[instrument]
    pub fn with_tick_interval(settings: EngineSettings, tick_interval: Duration) -> Self {
        let engine = GameEngine::new(settings);
        let (updates, _) = watch::channel(engine.snapshot());
        info!("Creating new game session");
        Self {
            shared: Arc::new(Shared {
                engine: Mutex::new(engine),
                updates,
                turn_changed: Notify::new(),
            }),
            tick_interval,
            timer: Mutex::new(None),
        }
    }

    /// Subscribes to state changes.
    ///
    /// The receiver always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<EngineSnapshot> {
        self.shared.updates.subscribe()
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> EngineSnapshot {
        self.shared.engine.lock().await.snapshot()
    }

    /// Starts a new round and arms a fresh turn timer.
    ///
    /// Any timer left from a previous round is cancelled first.
    #[instrument(skip(self))]
    pub async fn start_round(&self) {
        let mut timer = self.timer.lock().await;
        *timer = None;

        {
            let mut engine = self.shared.engine.lock().await;
            engine.start_round();
            self.shared.publish(&engine);
        }

        *timer = Some(TurnTimer::spawn(Arc::clone(&self.shared), self.tick_interval));
        debug!("Turn timer armed");
    }

    /// Places the current player's mark.
    ///
    /// The turn timer restarts a full tick for the next player.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the move is rejected; nothing changes.
    #[instrument(skip(self))]
    pub async fn place(&self, index: usize) -> Result<PlaceOutcome, InvalidMove> {
        let mut engine = self.shared.engine.lock().await;
        match engine.place(index) {
            Ok(outcome) => {
                self.shared.publish(&engine);
                drop(engine);
                self.shared.turn_changed.notify_one();
                Ok(outcome)
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                Err(e)
            }
        }
    }

    /// Stops the session: cancels the timer and clears the score.
    #[instrument(skip(self))]
    pub async fn stop_session(&self) {
        *self.timer.lock().await = None;
        let mut engine = self.shared.engine.lock().await;
        engine.stop_session();
        self.shared.publish(&engine);
    }
}

/// Counts down the current turn until the round stops being active.
///
/// Each iteration arms the timer for the current turn token. A placement
/// wakes the loop early so the next player gets a full tick, and a tick that
/// raced a placement finds its token stale and changes nothing.
async fn run_turn_timer(shared: Arc<Shared>, interval: Duration) {
    loop {
        let armed = shared.engine.lock().await.turn_token();

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shared.turn_changed.notified() => continue,
        }

        let mut engine = shared.engine.lock().await;
        match engine.tick_turn(armed) {
            TickOutcome::Idle => {
                debug!("Round no longer active, timer exiting");
                return;
            }
            TickOutcome::Stale => {}
            TickOutcome::Counting { .. } | TickOutcome::TimedOut { .. } => {
                shared.publish(&engine);
            }
        }
    }
}
