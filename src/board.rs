//! Board model: a fixed-size square grid of cells.
//!
//! The board is plain data. It knows its size, how to read and write a
//! single cell, and how to enumerate neighbors; the rules that give those
//! cells meaning live in [`crate::group`], [`crate::capture`],
//! [`crate::territory`] and [`crate::rules`].
//!
//! Points are `(row, col)` pairs, 0-indexed from the top-left corner.

use std::fmt;

use crate::constants::{DELTA, MAX_LETTER_COLUMNS};
use crate::error::{EngineError, Result};

/// A point on the board as `(row, col)`.
pub type Point = (usize, usize);

/// Stone color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player's color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// State of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The stone color on this cell, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// An NxN grid of cells. The size is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Parse a board from a text diagram.
    ///
    /// Each non-blank line is one row; `X` is Black, `O` is White and `.`
    /// is empty. Whitespace inside a line is ignored, so the output of
    /// [`Board`]'s `Display` impl parses back unchanged.
    pub fn from_diagram(text: &str) -> Result<Self> {
        let rows: Vec<Vec<Cell>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|chars| !chars.is_empty())
            .map(|chars| {
                chars
                    .into_iter()
                    .map(|c| match c {
                        'X' | 'x' | 'B' | 'b' => Ok(Cell::Black),
                        'O' | 'o' | 'W' | 'w' => Ok(Cell::White),
                        '.' | '+' => Ok(Cell::Empty),
                        other => Err(EngineError::InvalidArgument(format!(
                            "unexpected character '{other}' in board diagram"
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<_>>()?;

        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidArgument("board diagram is empty".into()));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(EngineError::InvalidArgument(format!(
                "board diagram is not square: row {i} has {} cells, expected {size}",
                row.len()
            )));
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    fn check(&self, pt: Point) -> Result<usize> {
        if self.in_bounds(pt) {
            Ok(self.idx(pt))
        } else {
            Err(EngineError::out_of_bounds(pt, self.size))
        }
    }

    /// Read a cell.
    pub fn get(&self, pt: Point) -> Result<Cell> {
        let i = self.check(pt)?;
        Ok(self.cells[i])
    }

    /// Read a cell the caller has already bounds-checked.
    #[inline]
    pub(crate) fn at(&self, pt: Point) -> Cell {
        self.cells[self.idx(pt)]
    }

    /// Overwrite a cell in place. No rules are applied.
    pub fn set(&mut self, pt: Point, cell: Cell) -> Result<()> {
        let i = self.check(pt)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Return a copy of this board with a stone at `pt`.
    ///
    /// Legality is the caller's responsibility (see
    /// [`crate::rules::is_legal_placement`]); only bounds are checked.
    pub fn with_stone(&self, pt: Point, color: Color) -> Result<Board> {
        let mut next = self.clone();
        next.set(pt, color.into())?;
        Ok(next)
    }

    /// In-bounds orthogonal neighbors of a point.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        DELTA.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.in_bounds((r, c)).then_some((r, c))
        })
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| (r, c)))
    }

    /// Empty points in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&pt| self.at(pt).is_empty())
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.at((row, col)).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a coordinate string into a point.
///
/// Accepts Go-style coordinates (`"D4"`: column letter skipping `I`, row
/// number counted from the bottom edge) or a numeric `"row,col"` pair.
pub fn parse_coord(s: &str, size: usize) -> Result<Point> {
    let s = s.trim();
    let invalid = || EngineError::InvalidArgument(format!("cannot parse coordinate '{s}'"));

    if let Some((r, c)) = s.split_once(',') {
        let row: usize = r.trim().parse().map_err(|_| invalid())?;
        let col: usize = c.trim().parse().map_err(|_| invalid())?;
        return check_point((row, col), size);
    }

    let mut chars = s.chars();
    let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() || letter == 'I' {
        return Err(invalid());
    }
    let mut col = (letter as u8 - b'A') as usize;
    // 'I' is skipped so that it is not confused with 'J'
    if letter > 'I' {
        col -= 1;
    }
    let number: usize = chars.as_str().parse().map_err(|_| invalid())?;
    if number == 0 || number > size {
        return Err(EngineError::InvalidArgument(format!(
            "row number {number} is outside 1..={size}"
        )));
    }
    check_point((size - number, col), size)
}

/// Column letter for `col`, skipping `I`. `None` past the last letter.
pub fn column_label(col: usize) -> Option<char> {
    if col >= MAX_LETTER_COLUMNS {
        return None;
    }
    let mut c = b'A' + col as u8;
    if c >= b'I' {
        c += 1;
    }
    Some(c as char)
}

/// Format a point as a Go-style coordinate (e.g. `"D4"`).
///
/// Boards wider than [`MAX_LETTER_COLUMNS`] run out of letters and are
/// formatted as `"row,col"` instead. Either form is accepted by
/// [`parse_coord`].
pub fn str_coord(pt: Point, size: usize) -> Result<String> {
    let (row, col) = check_point(pt, size)?;
    if size > MAX_LETTER_COLUMNS {
        return Ok(format!("{row},{col}"));
    }
    // check_point keeps col below size
    match column_label(col) {
        Some(letter) => Ok(format!("{letter}{}", size - row)),
        None => Err(EngineError::out_of_bounds(pt, size)),
    }
}

fn check_point(pt: Point, size: usize) -> Result<Point> {
    if pt.0 < size && pt.1 < size {
        Ok(pt)
    } else {
        Err(EngineError::out_of_bounds(pt, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7);
        assert_eq!(board.size(), 7);
        assert_eq!(board.count(Cell::Empty), 49);
        assert!(board.points().all(|pt| board.get(pt) == Ok(Cell::Empty)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(5);
        assert_eq!(
            board.get((5, 0)),
            Err(EngineError::OutOfBounds { row: 5, col: 0, size: 5 })
        );
        assert!(board.get((0, 5)).is_err());
        assert!(board.get((4, 4)).is_ok());
    }

    #[test]
    fn test_with_stone_leaves_original_untouched() {
        let board = Board::new(3);
        let next = board.with_stone((1, 1), Color::White).unwrap();
        assert_eq!(board.get((1, 1)), Ok(Cell::Empty));
        assert_eq!(next.get((1, 1)), Ok(Cell::White));
        assert!(board.with_stone((3, 1), Color::White).is_err());
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let board = Board::new(3);
        assert_eq!(board.neighbors((0, 0)).count(), 2);
        assert_eq!(board.neighbors((0, 1)).count(), 3);
        let mut center: Vec<_> = board.neighbors((1, 1)).collect();
        center.sort();
        assert_eq!(center, vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::new(1);
        assert_eq!(board.neighbors((0, 0)).count(), 0);
        assert_eq!(board.points().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_points_row_major() {
        let board = Board::new(2);
        let pts: Vec<_> = board.points().collect();
        assert_eq!(pts, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_diagram_roundtrip() {
        let text = "X . O\n. X .\nO . .\n";
        let board = Board::from_diagram(text).unwrap();
        assert_eq!(board.get((0, 0)), Ok(Cell::Black));
        assert_eq!(board.get((0, 2)), Ok(Cell::White));
        assert_eq!(board.get((2, 0)), Ok(Cell::White));
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn test_diagram_rejects_bad_input() {
        assert!(Board::from_diagram("").is_err());
        assert!(Board::from_diagram("X.\n.").is_err());
        assert!(Board::from_diagram("X?\n..").is_err());
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A7", 7), Ok((0, 0)));
        assert_eq!(parse_coord("a1", 7), Ok((6, 0)));
        assert_eq!(parse_coord("D4", 7), Ok((3, 3)));
        // 'I' is skipped, so 'J' is the ninth column
        assert_eq!(parse_coord("J1", 9), Ok((8, 8)));
        assert_eq!(parse_coord("2, 5", 7), Ok((2, 5)));
        assert!(parse_coord("I3", 9).is_err());
        assert!(parse_coord("A8", 7).is_err());
        assert!(parse_coord("H1", 7).is_err());
        assert!(parse_coord("7,0", 7).is_err());
        assert!(parse_coord("pass", 7).is_err());
    }

    #[test]
    fn test_str_coord_roundtrip() {
        let board = Board::new(9);
        for pt in board.points() {
            let s = str_coord(pt, 9).unwrap();
            assert_eq!(parse_coord(&s, 9), Ok(pt), "roundtrip failed for {s}");
        }
    }

    #[test]
    fn test_column_labels_stop_at_z() {
        assert_eq!(column_label(0), Some('A'));
        assert_eq!(column_label(8), Some('J'));
        assert_eq!(column_label(24), Some('Z'));
        assert_eq!(column_label(25), None);
        assert_eq!(column_label(usize::MAX), None);
    }

    #[test]
    fn test_str_coord_on_wide_boards() {
        assert_eq!(str_coord((0, 24), 25), Ok("Z25".to_string()));
        assert_eq!(parse_coord("Z25", 25), Ok((0, 24)));

        // past 25 columns there are no letters left
        assert_eq!(str_coord((0, 25), 26), Ok("0,25".to_string()));
        for size in [26, 40] {
            let board = Board::new(size);
            for pt in board.points() {
                let s = str_coord(pt, size).unwrap();
                assert_eq!(parse_coord(&s, size), Ok(pt), "roundtrip failed for {s}");
            }
        }
    }

    #[test]
    fn test_str_coord_out_of_bounds() {
        assert!(matches!(
            str_coord((7, 0), 7),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert!(matches!(
            str_coord((0, 300), 7),
            Err(EngineError::OutOfBounds { .. })
        ));
    }
}
