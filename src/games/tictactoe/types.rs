//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if the square holds `player`'s mark.
    pub fn is(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }

    /// Single-character symbol, blank when empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Square board of `dimension x dimension` squares in row-major order.
///
/// The square storage is allocated once and never resized, so the board
/// always holds exactly `dimension * dimension` squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    dimension: usize,
    squares: Box<[Square]>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            squares: vec![Square::Empty; dimension * dimension].into_boxed_slice(),
        }
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of squares (`dimension * dimension`).
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// True for a zero-sized board.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Mutable access to the square at the given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Square> {
        self.squares.get_mut(index)
    }

    /// Gets the square at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Square {
        self.squares[row * self.dimension + col]
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), &'static str> {
        match self.squares.get_mut(index) {
            Some(slot) => {
                *slot = square;
                Ok(())
            }
            None => Err("Position out of bounds"),
        }
    }

    /// Checks if the square at `index` is empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Resets every square to empty.
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based index.
    pub fn display(&self) -> String {
        let width = self.len().to_string().len();
        let mut rows = Vec::with_capacity(self.dimension);
        for row in 0..self.dimension {
            let cells: Vec<String> = (0..self.dimension)
                .map(|col| {
                    let index = row * self.dimension + col;
                    match self.squares[index] {
                        Square::Empty => format!("{:>width$}", index + 1),
                        occupied => format!("{:>width$}", occupied.symbol()),
                    }
                })
                .collect();
            rows.push(cells.join("|"));
        }
        let separator = vec!["-".repeat(width); self.dimension].join("+");
        rows.join(&format!("\n{}\n", separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.len(), 9);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(3);
        assert!(board.set(9, Square::Occupied(Player::X)).is_err());
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_get_mut_bounds() {
        let mut board = Board::new(3);
        *board.get_mut(8).unwrap() = Square::Occupied(Player::O);
        assert_eq!(board.get(8), Some(Square::Occupied(Player::O)));
        assert!(board.get_mut(9).is_none());
    }

    #[test]
    fn test_clear_keeps_length() {
        let mut board = Board::new(4);
        board.set(5, Square::Occupied(Player::O)).unwrap();
        board.clear();
        assert_eq!(board.len(), 16);
        assert!(board.is_vacant(5));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.set(0, Square::Occupied(Player::X)).unwrap();
        board.set(4, Square::Occupied(Player::O)).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
