//! Easy difficulty: uniform random placement

use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::board::{Board, Mark};

/// Place `computer` on a uniformly random empty cell.
///
/// No-op on a full board.
pub fn apply<R: Rng + ?Sized>(board: &mut Board, computer: Mark, rng: &mut R) {
    let moves = board.available_moves();
    if let Some(&(row, col)) = moves.choose(rng) {
        board.set(row, col, computer.to_cell());
    }
}
