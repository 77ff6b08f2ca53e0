//! Move legality and end-of-game detection.
//!
//! The rule set is deliberately small: a placement is legal on any empty
//! in-bounds cell (suicide and repetition are allowed), the game ends when
//! the board is full, and the winner is decided by territory alone.

use std::fmt;

use crate::board::{Board, Color, Point};
use crate::error::{EngineError, Result};
use crate::territory::territory;

/// Outcome of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win(Color),
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(color) => write!(f, "{color} wins!"),
            GameResult::Draw => write!(f, "Game Draw!"),
        }
    }
}

/// True iff `pt` is on the board and empty.
pub fn is_legal_placement(board: &Board, pt: Point) -> bool {
    board.get(pt).is_ok_and(|cell| cell.is_empty())
}

/// Return a new board with `color` placed at `pt`.
///
/// Captures are not resolved here; call [`crate::capture::apply_captures`]
/// on the result.
///
/// # Errors
/// - `OutOfBounds` if `pt` is off the board
/// - `InvalidArgument` if `pt` is already occupied
pub fn place(board: &Board, pt: Point, color: Color) -> Result<Board> {
    if !board.get(pt)?.is_empty() {
        return Err(EngineError::InvalidArgument(format!(
            "({}, {}) is already occupied",
            pt.0, pt.1
        )));
    }
    board.with_stone(pt, color)
}

/// True while at least one legal placement remains.
pub fn has_legal_move(board: &Board) -> bool {
    board.empty_points().next().is_some()
}

/// The result of the game, or `None` while it is still in progress.
///
/// Captured stones do not take part; only territory is compared.
pub fn winner(board: &Board) -> Option<GameResult> {
    if has_legal_move(board) {
        return None;
    }
    let t = territory(board);
    Some(match t.black.cmp(&t.white) {
        std::cmp::Ordering::Greater => GameResult::Win(Color::Black),
        std::cmp::Ordering::Less => GameResult::Win(Color::White),
        std::cmp::Ordering::Equal => GameResult::Draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_legal_placement() {
        let b = Board::new(3).with_stone((1, 1), Color::Black).unwrap();
        assert!(is_legal_placement(&b, (0, 0)));
        assert!(!is_legal_placement(&b, (1, 1)));
        assert!(!is_legal_placement(&b, (3, 0)));
        assert!(!is_legal_placement(&b, (0, usize::MAX)));
    }

    #[test]
    fn test_place_returns_new_board() {
        let b = Board::new(3);
        let next = place(&b, (2, 2), Color::White).unwrap();
        assert_eq!(next.get((2, 2)), Ok(Cell::White));
        assert_eq!(b.get((2, 2)), Ok(Cell::Empty));
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_bounds() {
        let b = Board::new(3).with_stone((0, 0), Color::Black).unwrap();
        assert!(matches!(
            place(&b, (0, 0), Color::White),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            place(&b, (0, 3), Color::White),
            Err(EngineError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_suicide_placement_is_legal() {
        let b = Board::from_diagram(
            ". X .
             X . X
             . X .",
        )
        .unwrap();
        assert!(is_legal_placement(&b, (1, 1)));
        assert!(place(&b, (1, 1), Color::White).is_ok());
    }

    #[test]
    fn test_winner_none_while_moves_remain() {
        let b = Board::from_diagram(
            "X X
             X .",
        )
        .unwrap();
        assert!(has_legal_move(&b));
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn test_full_board_is_draw_without_territory() {
        let b = Board::from_diagram(
            "X O
             O X",
        )
        .unwrap();
        assert!(!has_legal_move(&b));
        assert_eq!(winner(&b), Some(GameResult::Draw));
    }

    #[test]
    fn test_result_display() {
        assert_eq!(GameResult::Win(Color::White).to_string(), "White wins!");
        assert_eq!(GameResult::Draw.to_string(), "Game Draw!");
    }
}
