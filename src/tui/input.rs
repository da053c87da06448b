//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: usize, key: KeyCode, dimension: usize) -> usize {
    if dimension == 0 {
        return cursor;
    }
    let (row, col) = (cursor / dimension, cursor % dimension);

    let (row, col) = match key {
        KeyCode::Right if col + 1 < dimension => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row + 1 < dimension => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        // No change for other keys or edge cases
        _ => (row, col),
    };
    row * dimension + col
}

/// Maps digit keys `1`-`9` to cells, for boards small enough to number.
pub fn digit_to_index(c: char, dimension: usize) -> Option<usize> {
    let digit = c.to_digit(10)? as usize;
    (digit >= 1 && digit <= dimension * dimension && dimension * dimension <= 9).then(|| digit - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(0, KeyCode::Right, 3), 1);
        assert_eq!(move_cursor(1, KeyCode::Down, 3), 4);
        assert_eq!(move_cursor(4, KeyCode::Left, 3), 3);
        assert_eq!(move_cursor(4, KeyCode::Up, 3), 1);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(2, KeyCode::Right, 3), 2);
        assert_eq!(move_cursor(6, KeyCode::Down, 3), 6);
        assert_eq!(move_cursor(0, KeyCode::Up, 4), 0);
        assert_eq!(move_cursor(12, KeyCode::Left, 4), 12);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_to_index('1', 3), Some(0));
        assert_eq!(digit_to_index('9', 3), Some(8));
        assert_eq!(digit_to_index('0', 3), None);
        assert_eq!(digit_to_index('5', 4), None);
        assert_eq!(digit_to_index('a', 3), None);
    }
}
