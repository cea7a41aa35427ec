//! Win detection for tic-tac-toe.
//!
//! Pure functions evaluating a board according to the game rules,
//! separated from board storage so the controller and tests can share
//! them.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The 8 lines that decide the game: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark holds all three cells of any line,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Cell::Marked(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_each_line() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(&line.map(|pos| (pos, mark)));
                assert_eq!(winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_full_board() {
        // X O X / X O O / O X X - every line is mixed.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::Center, Mark::O),
            (Position::MiddleRight, Mark::O),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::X),
        ]);
        assert_eq!(winner(&board), None);
    }
}
