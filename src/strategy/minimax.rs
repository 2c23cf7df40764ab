//! Hard difficulty: exhaustive adversarial search
//!
//! The full game tree is searched with no pruning and no caching; at most
//! 9! leaf paths, well under perceptible time. Provisional placements go on
//! board copies (`Board` is `Copy`), so the caller's board is never touched
//! until a move is committed.

use crate::board::{Board, Coord, Mark};
use crate::lines::{self, WIN_SCORE};

/// Sentinel below any reachable score
const SCORE_FLOOR: i32 = -1000;
/// Sentinel above any reachable score
const SCORE_CEILING: i32 = 1000;

/// Recursively evaluate a position for `computer`.
///
/// Terminal positions score `+10`/`-10`/`0` via [`lines::score`]. On the
/// maximizing ply the computer's mark is tried on every empty cell and the
/// maximum child value kept; the minimizing ply is symmetric with the
/// opponent's mark and the minimum.
///
/// The search does not discount for depth: among several winning lines it is
/// indifferent to how many moves away the win is, which is still optimal
/// play for a solved game this small.
pub fn minimax(board: &Board, computer: Mark, maximizing: bool) -> i32 {
    let score = lines::score(board, computer);
    if score == WIN_SCORE || score == -WIN_SCORE {
        return score;
    }
    if board.is_full() {
        return 0;
    }

    let mark = if maximizing {
        computer
    } else {
        computer.opponent()
    };

    let mut best = if maximizing {
        SCORE_FLOOR
    } else {
        SCORE_CEILING
    };

    for (row, col) in board.available_moves() {
        let mut child = *board;
        child.set(row, col, mark.to_cell());
        let value = minimax(&child, computer, !maximizing);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Find the optimal move for `computer` without committing it.
///
/// Each available move is evaluated with the opponent to reply; the move
/// with the strictly greatest value wins, ties keeping the first move in
/// row-major order. Returns `None` on a full board.
pub fn choose_best_move(board: &Board, computer: Mark) -> Option<Coord> {
    let mut best_value = SCORE_FLOOR;
    let mut best_move = None;

    for (row, col) in board.available_moves() {
        let mut child = *board;
        child.set(row, col, computer.to_cell());
        let value = minimax(&child, computer, false);
        if value > best_value {
            best_value = value;
            best_move = Some((row, col));
        }
    }

    best_move
}

/// Commit the optimal move for `computer`.
///
/// No-op on a full board.
pub fn apply(board: &mut Board, computer: Mark) {
    if let Some((row, col)) = choose_best_move(board, computer) {
        board.set(row, col, computer.to_cell());
    }
}
