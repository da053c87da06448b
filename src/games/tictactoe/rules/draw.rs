//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::super::win::check_win;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && !check_win(board, Player::X) && !check_win(board, Player::O)
    }

    fn board_from(marks: &str) -> Board {
        let dimension = (marks.len() as f64).sqrt() as usize;
        let mut board = Board::new(dimension);
        for (index, c) in marks.chars().enumerate() {
            let square = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board.set(index, square).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_from("X...O....")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert!(is_draw(&board_from("XOXOXXOXO")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        assert!(!is_draw(&board_from("XXXOOXOXO")));
    }
}
