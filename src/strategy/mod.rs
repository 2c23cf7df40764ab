//! Computer move selection strategies and difficulty dispatch

pub mod heuristic;
pub mod minimax;
pub mod random;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};

/// Strength of the computer opponent.
///
/// Chosen once per match and immutable for its duration; selects which
/// move-selection strategy [`apply_computer_move`] dispatches to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random placement
    Easy,
    /// Win-if-possible, block-if-threatened, positional preference
    #[default]
    Medium,
    /// Exhaustive minimax search (optimal play)
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

/// Place one move for `computer` using the strategy for `difficulty`.
///
/// Exactly one cell transitions from empty to the computer's mark, except on
/// a full board where every strategy is a safe no-op.
pub fn apply_computer_move<R: Rng + ?Sized>(
    board: &mut Board,
    computer: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) {
    match difficulty {
        Difficulty::Easy => random::apply(board, computer, rng),
        Difficulty::Medium => heuristic::apply(board, computer, rng),
        Difficulty::Hard => minimax::apply(board, computer),
    }
}
