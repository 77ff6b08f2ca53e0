//! Group and liberty analysis.
//!
//! A group is a maximal set of same-colored stones connected through
//! orthogonal adjacency. Groups are recomputed on every query; boards are
//! small and change every move, so nothing is cached.

use std::collections::HashSet;

use crate::board::{Board, Cell, Point};
use crate::error::{EngineError, Result};

/// Collect the group containing the stone at `start`.
///
/// Uses an explicit stack flood-fill; exploration order does not affect the
/// resulting set.
///
/// # Errors
/// - `OutOfBounds` if `start` is off the board
/// - `InvalidArgument` if the cell at `start` is empty
pub fn connected_group(board: &Board, start: Point) -> Result<HashSet<Point>> {
    let color = board.get(start)?;
    if color == Cell::Empty {
        return Err(EngineError::InvalidArgument(format!(
            "no stone at ({}, {}) to build a group from",
            start.0, start.1
        )));
    }

    let mut group = HashSet::new();
    let mut stack = vec![start];
    while let Some(pt) = stack.pop() {
        if !group.insert(pt) {
            continue;
        }
        for n in board.neighbors(pt) {
            if board.at(n) == color && !group.contains(&n) {
                stack.push(n);
            }
        }
    }
    Ok(group)
}

/// True if any stone of `group` touches an empty cell.
///
/// An empty group has no liberty. Points outside the board are ignored.
pub fn has_liberty<'a>(board: &Board, group: impl IntoIterator<Item = &'a Point>) -> bool {
    group
        .into_iter()
        .filter(|&&pt| board.in_bounds(pt))
        .any(|&pt| board.neighbors(pt).any(|n| board.at(n).is_empty()))
}
