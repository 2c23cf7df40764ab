//! Match session management: turn alternation and outcome tracking

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark, SIDE};
use crate::lines::{self, Outcome};
use crate::strategy::{self, Difficulty};

/// One match of tic-tac-toe.
///
/// Owns the board for the duration of a match and alternates the side to
/// move after every placement. X always moves first. State is ephemeral:
/// [`Game::reset`] discards everything for the next match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    outcome: Option<Outcome>,
}

impl Game {
    /// Create a new match with an empty board and X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Mark::X,
            outcome: None,
        }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move next
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The terminal outcome, if the match is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the match has ended
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Clear the board and start a fresh match
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Place the side to move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Rejects moves after the match has ended, outside the board, or on an
    /// occupied cell.
    pub fn play(&mut self, row: usize, col: usize) -> Result<(), crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if row >= SIDE || col >= SIDE {
            return Err(crate::Error::OutOfBounds { row, col });
        }
        if !self.board.is_empty(row, col) {
            return Err(crate::Error::CellOccupied { row, col });
        }

        self.board.set(row, col, self.to_move.to_cell());
        self.advance_turn();
        Ok(())
    }

    /// Let the computer place a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the match has already ended.
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(), crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        strategy::apply_computer_move(&mut self.board, self.to_move, difficulty, rng);
        self.advance_turn();
        Ok(())
    }

    /// Re-evaluate the outcome and hand the turn to the other side
    fn advance_turn(&mut self) {
        self.outcome = lines::evaluate(&self.board);
        self.to_move = self.to_move.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
