//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// Checks whether `player` owns a complete line on the board.
///
/// A line is any full row, any full column, the main diagonal or the
/// anti-diagonal. Each line is scanned once, so the check is O(N²) for an
/// `N x N` board.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn check_win(board: &Board, player: Player) -> bool {
    let n = board.dimension();
    if n == 0 {
        return false;
    }

    let owns = |row: usize, col: usize| board.at(row, col).is(player);

    let any_row = (0..n).any(|row| (0..n).all(|col| owns(row, col)));
    let any_col = (0..n).any(|col| (0..n).all(|row| owns(row, col)));
    let main_diagonal = (0..n).all(|i| owns(i, i));
    let anti_diagonal = (0..n).all(|i| owns(i, n - 1 - i));

    any_row || any_col || main_diagonal || anti_diagonal
}
