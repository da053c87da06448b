//! Timed tic-tac-toe engine.
//!
//! [`GameEngine`] is a synchronous state machine owning the board, the player
//! on turn, the per-turn countdown, the session score and the round phase.
//! It does no scheduling of its own: callers feed it ticks and placements in
//! order, and read [`EngineSnapshot`] copies to render.

use super::action::{EngineEvent, InvalidMove, PlaceOutcome, SettingsError, TickOutcome};
use super::phases::{RoundPhase, RoundResult, TurnToken};
use super::rules::{check_win, is_full};
use super::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default seconds per turn.
pub const TURN_SECONDS: u32 = 10;

/// Default board side length.
pub const DEFAULT_DIMENSION: usize = 3;

/// Largest supported board side length.
pub const MAX_DIMENSION: usize = 16;

/// Validated engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct EngineSettings {
    /// Board side length.
    dimension: usize,
    /// Seconds each player gets per turn.
    turn_seconds: u32,
}

impl EngineSettings {
    /// Creates settings, rejecting a dimension outside `1..=MAX_DIMENSION`
    /// or zero-second turns.
    pub fn new(dimension: usize, turn_seconds: u32) -> Result<Self, SettingsError> {
        if !(1..=MAX_DIMENSION).contains(&dimension) {
            return Err(SettingsError::DimensionOutOfRange {
                dimension,
                max: MAX_DIMENSION,
            });
        }
        if turn_seconds == 0 {
            return Err(SettingsError::ZeroTurnSeconds);
        }
        Ok(Self {
            dimension,
            turn_seconds,
        })
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            turn_seconds: TURN_SECONDS,
        }
    }
}

/// Wins per player across the rounds of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by X.
    pub x: u32,
    /// Rounds won by O.
    pub o: u32,
}

impl Score {
    /// Wins for the given player.
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

/// Owned copy of everything a presentation layer displays.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct EngineSnapshot {
    /// Board contents.
    board: Board,
    /// Player on turn.
    current_player: Player,
    /// Seconds left in the current turn.
    countdown: u32,
    /// Seconds per turn.
    turn_seconds: u32,
    /// Session score.
    score: Score,
    /// Round phase, including the result once ended.
    phase: RoundPhase,
    /// Identity of the current turn.
    turn_token: TurnToken,
}

impl EngineSnapshot {
    /// Result of the round, if it has ended.
    pub fn round_result(&self) -> Option<RoundResult> {
        self.phase.result()
    }

    /// True while the round accepts moves.
    pub fn is_round_active(&self) -> bool {
        self.phase.is_active()
    }
}

/// Tic-tac-toe engine with a per-turn countdown.
#[derive(Debug, Clone)]
pub struct GameEngine {
    settings: EngineSettings,
    board: Board,
    current_player: Player,
    countdown: u32,
    score: Score,
    phase: RoundPhase,
    turn_token: TurnToken,
}

impl GameEngine {
    /// Creates an engine with an empty board and no round running.
    #[instrument]
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            board: Board::new(settings.dimension),
            current_player: Player::X,
            countdown: settings.turn_seconds,
            score: Score::default(),
            phase: RoundPhase::NotStarted,
            turn_token: TurnToken::default(),
        }
    }

    /// Engine parameters.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player on turn.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Seconds left in the current turn.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Result of the round, if it has ended.
    pub fn round_result(&self) -> Option<RoundResult> {
        self.phase.result()
    }

    /// True while the round accepts moves.
    pub fn is_round_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Identity of the current turn.
    pub fn turn_token(&self) -> TurnToken {
        self.turn_token
    }

    /// Starts a fresh round: empty board, X to move, full countdown.
    ///
    /// The score carries over from previous rounds.
    #[instrument(skip(self), fields(score_x = self.score.x, score_o = self.score.o))]
    pub fn start_round(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.countdown = self.settings.turn_seconds;
        self.phase = RoundPhase::Active;
        self.turn_token = self.turn_token.next();
        info!("Round started");
    }

    /// Advances the countdown by one second.
    ///
    /// When the countdown reaches zero the turn passes to the opponent with
    /// no mark placed. Does nothing unless a round is active.
    #[instrument(skip(self), fields(player = %self.current_player, countdown = self.countdown))]
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_active() {
            return TickOutcome::Idle;
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return TickOutcome::Counting {
                remaining: self.countdown,
            };
        }

        let timed_out = self.current_player;
        self.pass_turn();
        info!(timed_out = %timed_out, next = %self.current_player, "Turn timed out");
        TickOutcome::TimedOut {
            next: self.current_player,
        }
    }

    /// Ticks only if `token` still names the current turn.
    ///
    /// Used by timers armed before a placement or timeout that has since
    /// ended the turn they were counting.
    pub fn tick_turn(&mut self, token: TurnToken) -> TickOutcome {
        if token != self.turn_token {
            debug!(?token, current = ?self.turn_token, "Ignoring tick for an ended turn");
            return TickOutcome::Stale;
        }
        self.tick()
    }

    /// Places the current player's mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] without touching any state if no round is
    /// active, the index is off the board, or the cell is taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, index: usize) -> Result<PlaceOutcome, InvalidMove> {
        if !self.phase.is_active() {
            return Err(InvalidMove::RoundInactive);
        }
        let cells = self.board.len();
        let square = self
            .board
            .get_mut(index)
            .ok_or(InvalidMove::OutOfBounds { index, cells })?;
        if *square != Square::Empty {
            return Err(InvalidMove::Occupied(index));
        }

        let player = self.current_player;
        *square = Square::Occupied(player);
        // Any timer still counting this turn is now stale.
        self.turn_token = self.turn_token.next();

        if check_win(&self.board, player) {
            self.score.record_win(player);
            self.phase = RoundPhase::Ended(RoundResult::Win(player));
            info!(winner = %player, score_x = self.score.x, score_o = self.score.o, "Round won");
            return Ok(PlaceOutcome::Won(player));
        }

        if is_full(&self.board) {
            self.phase = RoundPhase::Ended(RoundResult::Draw);
            info!("Round drawn");
            return Ok(PlaceOutcome::Draw);
        }

        self.current_player = player.opponent();
        self.countdown = self.settings.turn_seconds;
        debug!(index, next = %self.current_player, "Mark placed");
        Ok(PlaceOutcome::Continue {
            next: self.current_player,
        })
    }

    /// Ends the session: score back to zero, no round running.
    ///
    /// The board and player on turn stay as they were until the next
    /// [`start_round`](Self::start_round). Calling it again is harmless.
    #[instrument(skip(self))]
    pub fn stop_session(&mut self) {
        self.score = Score::default();
        self.phase = RoundPhase::NotStarted;
        self.turn_token = self.turn_token.next();
        info!("Session stopped");
    }

    /// Applies one event from an ordered event stream.
    pub fn apply(&mut self, event: EngineEvent) -> Result<(), InvalidMove> {
        match event {
            EngineEvent::Tick => {
                self.tick();
                Ok(())
            }
            EngineEvent::Place(index) => self.place(index).map(|_| ()),
        }
    }

    /// Copies the observable state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            countdown: self.countdown,
            turn_seconds: self.settings.turn_seconds,
            score: self.score,
            phase: self.phase,
            turn_token: self.turn_token,
        }
    }

    fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.countdown = self.settings.turn_seconds;
        self.turn_token = self.turn_token.next();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
