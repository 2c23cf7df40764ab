//! Medium difficulty: single-ply lookahead with positional preference

use rand::Rng;

use crate::board::{Board, Coord, Mark};
use crate::lines;
use crate::strategy::random;

/// Corner probe order: top-left, top-right, bottom-left, bottom-right.
const CORNERS: [Coord; 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

const CENTER: Coord = (1, 1);

/// Find the first empty cell where placing `mark` completes a line.
///
/// Probes empty cells in row-major order on a board copy, so ties resolve to
/// the first match and the caller's board is untouched.
fn winning_placement(board: &Board, mark: Mark) -> Option<Coord> {
    for (row, col) in board.available_moves() {
        let mut probe = *board;
        probe.set(row, col, mark.to_cell());
        if lines::has_won(&probe, mark) {
            return Some((row, col));
        }
    }
    None
}

/// Place `computer` according to the heuristic priority rules.
///
/// First applicable rule wins:
/// 1. complete an own line,
/// 2. block the opponent's completing move,
/// 3. take the center,
/// 4. take the first free corner,
/// 5. fall back to a random move.
///
/// No-op on a full board.
pub fn apply<R: Rng + ?Sized>(board: &mut Board, computer: Mark, rng: &mut R) {
    if let Some((row, col)) = winning_placement(board, computer) {
        board.set(row, col, computer.to_cell());
        return;
    }

    if let Some((row, col)) = winning_placement(board, computer.opponent()) {
        board.set(row, col, computer.to_cell());
        return;
    }

    let (row, col) = CENTER;
    if board.is_empty(row, col) {
        board.set(row, col, computer.to_cell());
        return;
    }

    for (row, col) in CORNERS {
        if board.is_empty(row, col) {
            board.set(row, col, computer.to_cell());
            return;
        }
    }

    random::apply(board, computer, rng);
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::board::Cell;
    use crate::lines::{Outcome, WinLine, evaluate};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_completes_own_line() {
        // O has two in the middle row
        let mut board = Board::from_string("X../OO./X..").unwrap();
        apply(&mut board, Mark::O, &mut rng());
        assert_eq!(board.get(1, 2), Cell::O);
        assert!(lines::has_won(&board, Mark::O));
    }

    #[test]
    fn test_blocks_opponent() {
        // X threatens the top row, O has no win
        let mut board = Board::from_string("XX./.O./...").unwrap();
        apply(&mut board, Mark::O, &mut rng());
        assert_eq!(board.get(0, 2), Cell::O);
    }

    #[test]
    fn test_win_takes_priority_over_block() {
        // X threatens row 0, O threatens row 1: O must complete its own
        // line at (1,2) rather than block at (0,2)
        let mut board = Board::from_string("XX./OO./...").unwrap();
        apply(&mut board, Mark::O, &mut rng());
        assert_eq!(board.get(1, 2), Cell::O);
        assert_eq!(
            evaluate(&board),
            Some(Outcome::Win {
                mark: Mark::O,
                line: WinLine::Row(1),
            })
        );
        assert!(board.is_empty(0, 2));
    }

    #[test]
    fn test_takes_center_when_no_threats() {
        let mut board = Board::from_string("X........").unwrap();
        apply(&mut board, Mark::O, &mut rng());
        assert_eq!(board.get(1, 1), Cell::O);
    }

    #[test]
    fn test_takes_first_free_corner() {
        // Center taken, no win or block, top-left free
        let mut board = Board::from_string(".X./.O./.X.").unwrap();
        apply(&mut board, Mark::O, &mut rng());
        assert_eq!(board.get(0, 0), Cell::O);
    }

    #[test]
    fn test_corner_order_skips_taken_corners() {
        // Top-left taken, center taken, no threats anywhere: the corner
        // scan falls through to top-right
        let mut board = Board::from_string("X../.O./.X.").unwrap();
        apply(&mut board, Mark::O, &mut rng());
        assert_eq!(board.get(0, 2), Cell::O);
    }

    #[test]
    fn test_random_fallback_on_edges_only() {
        // Center and all corners taken, no win or block; only the two
        // remaining edge cells qualify, via the random fallback
        let mut board = Board::from_string("X.O/OXX/X.O").unwrap();
        apply(&mut board, Mark::O, &mut rng());
        let filled = [board.get(0, 1), board.get(2, 1)];
        assert_eq!(filled.iter().filter(|&&c| c == Cell::O).count(), 1);
    }

    #[test]
    fn test_full_board_noop() {
        let mut board = Board::from_string("XOX/XOO/OXX").unwrap();
        let snapshot = board;
        apply(&mut board, Mark::O, &mut rng());
        assert_eq!(board, snapshot);
    }
}
