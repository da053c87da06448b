//! Tests for the timed tic-tac-toe engine.

use timed_tictactoe::{
    Board, EngineSettings, GameEngine, InvalidMove, PlaceOutcome, Player, RoundPhase, RoundResult,
    Square, TURN_SECONDS, TickOutcome, check_win,
};

fn started() -> GameEngine {
    let mut engine = GameEngine::default();
    engine.start_round();
    engine
}

#[test]
fn test_start_round_resets_state() {
    let mut engine = started();
    engine.place(4).unwrap();
    engine.tick();

    engine.start_round();
    assert!(engine.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.countdown(), TURN_SECONDS);
    assert_eq!(engine.round_result(), None);
    assert!(engine.is_round_active());
}

#[test]
fn test_single_row_wins_only_for_owner() {
    for n in 1..=6 {
        for row in 0..n {
            let mut board = Board::new(n);
            for col in 0..n {
                board.set(row * n + col, Square::Occupied(Player::O)).unwrap();
            }
            assert!(check_win(&board, Player::O));
            assert!(!check_win(&board, Player::X));
        }
    }
}

#[test]
fn test_occupied_placement_rejected_without_mutation() {
    let mut engine = started();
    engine.place(0).unwrap();
    let before = engine.snapshot();

    assert_eq!(engine.place(0), Err(InvalidMove::Occupied(0)));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_out_of_bounds_rejected_without_mutation() {
    let mut engine = started();
    let before = engine.snapshot();

    assert_eq!(
        engine.place(9),
        Err(InvalidMove::OutOfBounds { index: 9, cells: 9 })
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_turn_alternation() {
    let mut engine = started();
    assert_eq!(engine.place(0), Ok(PlaceOutcome::Continue { next: Player::O }));
    assert_eq!(engine.place(4), Ok(PlaceOutcome::Continue { next: Player::X }));
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_countdown_expiry_passes_turn_once() {
    let mut engine = started();
    let board_before = engine.board().clone();

    let outcomes: Vec<TickOutcome> = (0..TURN_SECONDS).map(|_| engine.tick()).collect();

    let timeouts = outcomes
        .iter()
        .filter(|o| matches!(o, TickOutcome::TimedOut { .. }))
        .count();
    assert_eq!(timeouts, 1);
    assert_eq!(outcomes.last(), Some(&TickOutcome::TimedOut { next: Player::O }));
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.countdown(), TURN_SECONDS);
    assert_eq!(engine.board(), &board_before);
}

#[test]
fn test_top_row_alternating_is_not_a_win() {
    let mut engine = started();
    for index in [0, 1, 2] {
        engine.place(index).unwrap();
    }
    assert_eq!(engine.round_result(), None);
    assert!(engine.is_round_active());
}

#[test]
fn test_left_column_wins_for_x() {
    let mut engine = started();
    engine.place(0).unwrap(); // X
    engine.place(1).unwrap(); // O
    engine.place(3).unwrap(); // X
    engine.place(2).unwrap(); // O
    assert_eq!(engine.place(6), Ok(PlaceOutcome::Won(Player::X)));

    assert_eq!(engine.round_result(), Some(RoundResult::Win(Player::X)));
    assert_eq!(engine.score().x, 1);
    assert_eq!(engine.score().o, 0);
    assert!(!engine.is_round_active());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = started();
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        engine.place(index).unwrap();
    }
    assert_eq!(engine.round_result(), Some(RoundResult::Draw));
    assert_eq!(engine.score().x, 0);
    assert_eq!(engine.score().o, 0);
}

#[test]
fn test_score_persists_across_rounds() {
    let mut engine = started();
    for index in [0, 3, 1, 4, 2] {
        engine.place(index).unwrap();
    }
    engine.start_round();
    for index in [0, 3, 1, 4, 8, 5] {
        engine.place(index).unwrap();
    }
    assert_eq!(engine.round_result(), Some(RoundResult::Win(Player::O)));
    assert_eq!(engine.score().of(Player::X), 1);
    assert_eq!(engine.score().of(Player::O), 1);
}

#[test]
fn test_stop_session_twice_is_safe() {
    let mut engine = started();
    for index in [0, 3, 1, 4, 2] {
        engine.place(index).unwrap();
    }
    assert_eq!(engine.score().x, 1);

    engine.stop_session();
    assert_eq!(engine.score().x, 0);
    assert_eq!(engine.phase(), RoundPhase::NotStarted);

    engine.stop_session();
    assert_eq!(engine.score().x, 0);
    assert_eq!(engine.score().o, 0);
    assert_eq!(engine.phase(), RoundPhase::NotStarted);
}

#[test]
fn test_larger_board_diagonal() {
    let mut engine = GameEngine::new(EngineSettings::new(4, 10).unwrap());
    engine.start_round();
    // X on main diagonal, O along the top row's right side
    for index in [0, 1, 5, 2, 10, 3] {
        engine.place(index).unwrap();
    }
    assert_eq!(engine.place(15), Ok(PlaceOutcome::Won(Player::X)));
}
