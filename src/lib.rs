//! Mini-Go: rules engine and heuristic opponent for a small Go-like game.
//!
//! The game is played on a small square board (7x7 by default). Stones are
//! placed on empty intersections, opposing groups left without liberties are
//! captured, and once the board is full the side holding more territory
//! wins. There is no ko rule and suicide is allowed.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and search weights
//! - [`board`] - Board model, points and coordinate parsing
//! - [`group`] - Connected groups and liberties
//! - [`capture`] - Capture resolution after a placement
//! - [`territory`] - Flood-fill territory scoring
//! - [`rules`] - Legality and end-of-game detection
//! - [`ai`] - One-ply heuristic move search
//! - [`game`] - A human vs computer session
//!
//! ## Example
//!
//! ```
//! use mini_go::ai::{Difficulty, GoAi};
//! use mini_go::board::{Board, Color};
//! use mini_go::capture::apply_captures;
//! use mini_go::rules::{is_legal_placement, place, winner};
//!
//! let board = Board::new(7);
//! assert!(is_legal_placement(&board, (3, 3)));
//!
//! let mut board = place(&board, (3, 3), Color::Black).unwrap();
//! let captured = apply_captures(&mut board, (3, 3)).unwrap();
//! assert_eq!(captured, 0);
//! assert_eq!(winner(&board), None);
//!
//! let mut ai = GoAi::seeded(7, Difficulty::Hard, 1);
//! let reply = ai.find_best_move(&board).unwrap();
//! assert!(is_legal_placement(&board, reply));
//! ```

pub mod ai;
pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod rules;
pub mod territory;

pub use error::{EngineError, Result};
