//! Capture resolution after a stone is placed.

use std::collections::HashSet;

use tracing::debug;

use crate::board::{Board, Cell, Point};
use crate::error::{EngineError, Result};
use crate::group::{connected_group, has_liberty};

/// Remove opposing groups left without liberties by the stone at `last`.
///
/// Only the orthogonal neighbors of `last` holding the opposite color are
/// examined. Each distinct group among them is tested once; a group with no
/// liberty is cleared completely and its size added to the returned count.
///
/// The placer's own group is never removed, even when it has no liberty
/// left after the move.
///
/// # Errors
/// - `OutOfBounds` if `last` is off the board
/// - `InvalidArgument` if there is no stone at `last`
pub fn apply_captures(board: &mut Board, last: Point) -> Result<usize> {
    let color = board.get(last)?.color().ok_or_else(|| {
        EngineError::InvalidArgument(format!(
            "no stone at ({}, {}) to resolve captures for",
            last.0, last.1
        ))
    })?;
    let enemy = Cell::from(color.opponent());

    let adjacent: Vec<Point> = board.neighbors(last).filter(|&n| board.at(n) == enemy).collect();
    let mut visited: HashSet<Point> = HashSet::new();
    let mut captured = 0;

    for n in adjacent {
        if visited.contains(&n) {
            continue;
        }
        let group = connected_group(board, n)?;
        visited.extend(group.iter().copied());
        if has_liberty(board, &group) {
            continue;
        }
        for &pt in &group {
            board.set(pt, Cell::Empty)?;
        }
        captured += group.len();
    }

    if captured > 0 {
        debug!(?last, %color, captured, "captured stones");
    }
    Ok(captured)
}
