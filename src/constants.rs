//! Constants for board dimensions and search heuristics.
//!
//! Everything the engine treats as a tunable number lives here so the
//! weights used by [`crate::ai`] can be read side by side.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). The game is designed around small boards.
pub const DEFAULT_SIZE: usize = 7;

/// Self-play stops after `size * size * MAX_GAME_LEN_FACTOR` moves. Captures
/// free cells again, so a game is not guaranteed to fill the board.
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Columns that can be named by a letter: `A`..=`Z` without `I`.
pub const MAX_LETTER_COLUMNS: usize = 25;

/// Orthogonal neighbor offsets as (row, col) deltas: N, S, W, E.
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Move Search Heuristics
// =============================================================================

/// Multiplier applied to `(size - distance_to_center)`.
pub const CENTER_WEIGHT: f64 = 2.0;

/// Bonus per orthogonal neighbor already holding one of our stones.
pub const CONNECTION_BONUS: f64 = 10.0;

/// Flat bonus when exactly [`CAPTURE_THREAT_NEIGHBORS`] neighbors are enemy stones.
pub const CAPTURE_THREAT_BONUS: f64 = 30.0;

/// Number of enemy neighbors that triggers [`CAPTURE_THREAT_BONUS`].
pub const CAPTURE_THREAT_NEIGHBORS: usize = 3;

/// Half-width of the square window scanned for empty cells.
pub const TERRITORY_RADIUS: usize = 2;

/// Bonus per empty cell inside the territory window.
pub const TERRITORY_BONUS: f64 = 2.0;

// =============================================================================
// Difficulty (noise magnitude added to every candidate score)
// =============================================================================

pub const NOISE_EASY: f64 = 50.0;
pub const NOISE_MEDIUM: f64 = 20.0;
pub const NOISE_HARD: f64 = 5.0;
