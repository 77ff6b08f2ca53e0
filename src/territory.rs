//! Territory scoring by flood-filling empty regions.
//!
//! Every maximal region of empty cells is visited exactly once. A region
//! belongs to a color when all stones bordering it are that color; a region
//! bordered by both colors, or by no stones at all, is neutral.

use std::collections::HashSet;

use crate::board::{Board, Color, Point};

/// A maximal connected set of empty points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub points: Vec<Point>,
    /// The single bordering color, or `None` for a neutral region.
    pub owner: Option<Color>,
}

/// Territory totals per color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Territory {
    pub black: usize,
    pub white: usize,
}

impl Territory {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// List every empty region of the board with its owner.
///
/// Regions are returned in the row-major order of their first point. The
/// visited set is shared across the whole scan so the total work is
/// proportional to the board area.
pub fn regions(board: &Board) -> Vec<Region> {
    let mut visited = vec![false; board.size() * board.size()];
    let idx = |(r, c): Point| r * board.size() + c;
    let mut out = Vec::new();

    for start in board.points() {
        if visited[idx(start)] || !board.at(start).is_empty() {
            continue;
        }

        let mut points = Vec::new();
        let mut borders: HashSet<Color> = HashSet::new();
        let mut stack = vec![start];
        visited[idx(start)] = true;

        while let Some(pt) = stack.pop() {
            points.push(pt);
            for n in board.neighbors(pt) {
                match board.at(n).color() {
                    Some(color) => {
                        borders.insert(color);
                    }
                    None if !visited[idx(n)] => {
                        visited[idx(n)] = true;
                        stack.push(n);
                    }
                    None => {}
                }
            }
        }

        let owner = match borders.len() {
            1 => borders.into_iter().next(),
            _ => None,
        };
        out.push(Region { points, owner });
    }
    out
}

/// Count the territory owned by each color.
pub fn territory(board: &Board) -> Territory {
    regions(board)
        .into_iter()
        .fold(Territory::default(), |mut t, region| {
            match region.owner {
                Some(Color::Black) => t.black += region.points.len(),
                Some(Color::White) => t.white += region.points.len(),
                None => {}
            }
            t
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        Board::from_diagram(diagram).unwrap()
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let b = Board::new(7);
        assert_eq!(territory(&b), Territory::default());
        let rs = regions(&b);
        assert_eq!(rs.len(), 1);
        assert_eq!(rs[0].points.len(), 49);
        assert_eq!(rs[0].owner, None);
    }

    #[test]
    fn test_single_color_region() {
        let b = board(
            ". X .
             X X X
             . . .",
        );
        // (0,0), (0,2) and the bottom row are each bordered only by black
        assert_eq!(territory(&b), Territory { black: 5, white: 0 });
    }

    #[test]
    fn test_mixed_border_is_neutral() {
        let b = board(
            ". X . O .
             . X . O .
             . X . O .
             . X . O .
             . X . O .",
        );
        let t = territory(&b);
        // left column is black, right column white, the middle touches both
        assert_eq!(t, Territory { black: 5, white: 5 });
        let neutral: Vec<Region> = regions(&b).into_iter().filter(|r| r.owner.is_none()).collect();
        assert_eq!(neutral.len(), 1);
        assert_eq!(neutral[0].points.len(), 5);
    }

    #[test]
    fn test_regions_partition_empty_cells() {
        let b = board(
            ". X . O .
             X . X . O
             . X O . .
             O . . X .
             . O . X .",
        );
        let rs = regions(&b);
        let mut seen = HashSet::new();
        for region in &rs {
            for &pt in &region.points {
                assert!(seen.insert(pt), "{pt:?} appears in two regions");
            }
        }
        let empty: HashSet<Point> = b.empty_points().collect();
        assert_eq!(seen, empty);
    }

    #[test]
    fn test_full_board_has_no_regions() {
        let b = board(
            "X O
             O X",
        );
        assert!(regions(&b).is_empty());
        assert_eq!(territory(&b), Territory::default());
    }
}
