//! One-ply heuristic move search.
//!
//! Every empty point is a candidate. Each candidate gets a static score from
//! four terms:
//!
//! - center proximity: `(size - manhattan distance to the center) * 2`
//! - connection: `+10` per orthogonal neighbor holding one of our stones
//! - capture threat: `+30` when exactly three neighbors are enemy stones
//! - open space: `+2` per empty cell in the 5x5 window around the candidate
//!
//! Uniform noise scaled by the [`Difficulty`] is then added to each score and
//! the highest total wins. Ties go to the first candidate in row-major order.
//!
//! The capture-threat term is a cheap proxy; it does not check whether the
//! enemy group actually runs out of liberties.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::board::{Board, Cell, Color, Point};
use crate::constants::{
    CAPTURE_THREAT_BONUS, CAPTURE_THREAT_NEIGHBORS, CENTER_WEIGHT, CONNECTION_BONUS, NOISE_EASY,
    NOISE_HARD, NOISE_MEDIUM, TERRITORY_BONUS, TERRITORY_RADIUS,
};
use crate::error::EngineError;

/// Opponent strength. Weaker levels add more noise to every score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Magnitude of the uniform noise added to candidate scores.
    pub fn noise(self) -> f64 {
        match self {
            Difficulty::Easy => NOISE_EASY,
            Difficulty::Medium => NOISE_MEDIUM,
            Difficulty::Hard => NOISE_HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown difficulty '{other}'"
            ))),
        }
    }
}

/// Source of uniform samples in `[0, 1)` used to perturb scores.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

/// A source that always returns the same value.
///
/// `FixedRandom(0.5)` cancels the noise term entirely, which makes the
/// search deterministic.
#[derive(Copy, Clone, Debug)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Heuristic computer opponent.
pub struct GoAi<R = fastrand::Rng> {
    size: usize,
    difficulty: Difficulty,
    color: Color,
    rng: R,
}

impl GoAi {
    /// Create an opponent playing White, seeded from the system.
    pub fn new(size: usize, difficulty: Difficulty) -> Self {
        Self::with_rng(size, difficulty, fastrand::Rng::new())
    }

    /// Create an opponent with a reproducible random stream.
    pub fn seeded(size: usize, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(size, difficulty, fastrand::Rng::with_seed(seed))
    }
}

impl<R: RandomSource> GoAi<R> {
    /// Create an opponent playing White with an explicit random source.
    pub fn with_rng(size: usize, difficulty: Difficulty, rng: R) -> Self {
        Self {
            size,
            difficulty,
            color: Color::White,
            rng,
        }
    }

    /// Play as `color` instead of White.
    pub fn playing(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Choose a move, or `None` when the board has no empty cell.
    pub fn find_best_move(&mut self, board: &Board) -> Option<Point> {
        debug_assert_eq!(board.size(), self.size, "board size differs from configured size");
        let noise = self.difficulty.noise();

        let mut best: Option<(Point, f64)> = None;
        for pt in board.empty_points() {
            let base = evaluate(board, pt, self.color);
            let score = base + (self.rng.next_f64() - 0.5) * noise;
            trace!(?pt, base, score, "candidate");
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((pt, score));
            }
        }

        if let Some((pt, score)) = best {
            debug!(?pt, score, color = %self.color, difficulty = %self.difficulty, "chose move");
        }
        best.map(|(pt, _)| pt)
    }
}

/// Static score of placing a `color` stone at `pt`, without noise.
pub fn evaluate(board: &Board, pt: Point, color: Color) -> f64 {
    let own = Cell::from(color);
    let enemy = Cell::from(color.opponent());

    let (friendly, hostile) = board.neighbors(pt).fold((0, 0), |(f, h), n| match board.at(n) {
        c if c == own => (f + 1, h),
        c if c == enemy => (f, h + 1),
        _ => (f, h),
    });

    let mut score = center_score(board.size(), pt);
    score += friendly as f64 * CONNECTION_BONUS;
    if hostile == CAPTURE_THREAT_NEIGHBORS {
        score += CAPTURE_THREAT_BONUS;
    }
    score += open_space_score(board, pt);
    score
}

/// Bonus for playing near the center. The center is `size / 2` without
/// truncation, so even-sized boards have it between intersections.
fn center_score(size: usize, (row, col): Point) -> f64 {
    let center = size as f64 / 2.0;
    let distance = (row as f64 - center).abs() + (col as f64 - center).abs();
    (size as f64 - distance) * CENTER_WEIGHT
}

/// Bonus per empty cell in the square window around `pt`, clipped to the board.
fn open_space_score(board: &Board, (row, col): Point) -> f64 {
    let last = board.size() - 1;
    let rows = row.saturating_sub(TERRITORY_RADIUS)..=(row + TERRITORY_RADIUS).min(last);
    let cols = col.saturating_sub(TERRITORY_RADIUS)..=(col + TERRITORY_RADIUS).min(last);

    let empty = rows
        .flat_map(|r| cols.clone().map(move |c| (r, c)))
        .filter(|&p| board.at(p).is_empty())
        .count();
    empty as f64 * TERRITORY_BONUS
}
