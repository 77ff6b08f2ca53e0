//! A game session between a human and the computer.
//!
//! [`Game`] owns the canonical board and drives the turn cycle: validate,
//! place, resolve captures, rescore, check for the end, pass the turn. All
//! mutation goes through `&mut self`, so a session has a single writer.

use tracing::info;

use crate::ai::{Difficulty, GoAi, RandomSource};
use crate::board::{Board, Color, Point};
use crate::capture::apply_captures;
use crate::error::{EngineError, Result};
use crate::rules::{GameResult, is_legal_placement, winner};
use crate::territory::{Territory, territory};

/// Per-color score shown to players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    /// Opposing stones this color has captured over the game.
    pub captured: usize,
    /// Territory currently held on the board.
    pub territory: usize,
}

/// What happened when a stone was played.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub point: Point,
    pub color: Color,
    pub captured: usize,
}

pub struct Game<R = fastrand::Rng> {
    board: Board,
    to_move: Color,
    captured_by_black: usize,
    captured_by_white: usize,
    territory: Territory,
    result: Option<GameResult>,
    /// Set when the game ended because the computer had nowhere to play.
    stalled: bool,
    ai: GoAi<R>,
}

impl Game {
    /// New game with an unseeded computer opponent playing White.
    pub fn new(size: usize, difficulty: Difficulty) -> Self {
        Self::with_ai(GoAi::new(size, difficulty))
    }

    /// New game with a reproducible computer opponent playing White.
    pub fn seeded(size: usize, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_ai(GoAi::seeded(size, difficulty, seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// New game against the given opponent. Black always moves first.
    pub fn with_ai(ai: GoAi<R>) -> Self {
        Self {
            board: Board::new(ai.size()),
            to_move: Color::Black,
            captured_by_black: 0,
            captured_by_white: 0,
            territory: Territory::default(),
            result: None,
            stalled: false,
            ai,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// The color played by the computer.
    pub fn computer(&self) -> Color {
        self.ai.color()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// True when the side to move is the computer and the game is running.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.ai.color()
    }

    pub fn score(&self, color: Color) -> Score {
        let captured = match color {
            Color::Black => self.captured_by_black,
            Color::White => self.captured_by_white,
        };
        Score {
            captured,
            territory: self.territory.get(color),
        }
    }

    /// Status line for display.
    pub fn status(&self) -> String {
        match self.result {
            Some(GameResult::Draw) if self.stalled => "Game Draw - No valid moves!".to_string(),
            Some(result) => result.to_string(),
            None => format!("{}'s turn", self.to_move),
        }
    }

    /// Play the side to move at `pt`.
    ///
    /// # Errors
    /// - `InvalidArgument` if the game is over or `pt` is occupied
    /// - `OutOfBounds` if `pt` is off the board
    pub fn play(&mut self, pt: Point) -> Result<MoveOutcome> {
        if let Some(result) = self.result {
            return Err(EngineError::InvalidArgument(format!(
                "game is over ({result})"
            )));
        }
        if !is_legal_placement(&self.board, pt) {
            // surface OutOfBounds from the board itself
            self.board.get(pt)?;
            return Err(EngineError::InvalidArgument(format!(
                "({}, {}) is already occupied",
                pt.0, pt.1
            )));
        }

        let color = self.to_move;
        let mut next = self.board.with_stone(pt, color)?;
        let captured = apply_captures(&mut next, pt)?;
        self.board = next;

        match color {
            Color::Black => self.captured_by_black += captured,
            Color::White => self.captured_by_white += captured,
        }
        self.territory = territory(&self.board);
        self.result = winner(&self.board);
        if let Some(result) = self.result {
            info!(%result, "game over");
        }
        self.to_move = color.opponent();

        Ok(MoveOutcome {
            point: pt,
            color,
            captured,
        })
    }

    /// Let the computer play for the side to move.
    ///
    /// Returns `Ok(None)` if the search found no move, which ends the game
    /// as a draw.
    ///
    /// # Errors
    /// `InvalidArgument` if the game is over or it is not the computer's turn.
    pub fn computer_move(&mut self) -> Result<Option<MoveOutcome>> {
        if !self.is_computer_turn() {
            return Err(EngineError::InvalidArgument(format!(
                "it is not the computer's turn ({})",
                self.status()
            )));
        }
        match self.ai.find_best_move(&self.board) {
            Some(pt) => self.play(pt).map(Some),
            None => {
                self.result = Some(GameResult::Draw);
                self.stalled = true;
                info!("computer found no move, game drawn");
                Ok(None)
            }
        }
    }

    /// Let the computer play the side to move regardless of its own color.
    ///
    /// Used for self-play, where one search drives both sides.
    pub fn auto_move(&mut self) -> Result<Option<MoveOutcome>> {
        let color = self.ai.color();
        self.ai.set_color(self.to_move);
        let outcome = self.computer_move();
        self.ai.set_color(color);
        outcome
    }

    /// Clear the board and all counters, keeping the same opponent.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.to_move = Color::Black;
        self.captured_by_black = 0;
        self.captured_by_white = 0;
        self.territory = Territory::default();
        self.result = None;
        self.stalled = false;
    }
}
