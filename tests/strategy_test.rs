//! Test suite for the difficulty dispatcher and move selectors
//! Validates the selection rules and their safety properties

use rand::{SeedableRng, rngs::StdRng};
use tictactoe::{
    Board, Cell, Difficulty, Mark, Outcome, WinLine, apply_computer_move, evaluate, score,
};

mod board_properties {
    use super::*;

    #[test]
    fn test_available_moves_matches_empty_census() {
        let boards = [
            Board::new(),
            Board::from_string("X........").unwrap(),
            Board::from_string("XO./.X./O..").unwrap(),
            Board::from_string("XOX/XOO/OXX").unwrap(),
        ];

        for board in boards {
            let moves = board.available_moves();
            assert_eq!(moves.len(), 9 - board.occupied_count());
            for &(row, col) in &moves {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_reset_restores_all_nine_moves() {
        let mut board = Board::from_string("XOX/.O./X..").unwrap();
        board.reset();
        assert_eq!(board.available_moves().len(), 9);
    }
}

mod evaluator_properties {
    use super::*;

    #[test]
    fn test_terminal_win_agrees_with_score() {
        let cases = [
            ("OOO/XX./X..", Mark::O, WinLine::Row(0)),
            ("X.O/X.O/X..", Mark::X, WinLine::Column(0)),
            ("O.X/XOX/..O", Mark::O, WinLine::Diagonal(tictactoe::Diagonal::Main)),
        ];

        for (s, winner, line) in cases {
            let board = Board::from_string(s).unwrap();
            assert_eq!(evaluate(&board), Some(Outcome::Win { mark: winner, line }));
            assert_eq!(score(&board, winner), 10);
            assert_eq!(score(&board, winner.opponent()), -10);
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert_eq!(evaluate(&board), Some(Outcome::Draw));
        assert_eq!(score(&board, Mark::X), 0);
        assert_eq!(score(&board, Mark::O), 0);
    }
}

mod dispatch_properties {
    use super::*;

    const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[test]
    fn test_every_difficulty_fills_one_empty_cell() {
        for difficulty in ALL {
            let mut rng = StdRng::seed_from_u64(17);
            let original = Board::from_string("X...O...X").unwrap();
            let mut board = original;

            apply_computer_move(&mut board, Mark::O, difficulty, &mut rng);

            let mut changed = 0;
            for (row, col) in (0..3).flat_map(|r| (0..3).map(move |c| (r, c))) {
                if board.get(row, col) != original.get(row, col) {
                    assert_eq!(original.get(row, col), Cell::Empty);
                    assert_eq!(board.get(row, col), Cell::O);
                    changed += 1;
                }
            }
            assert_eq!(changed, 1, "difficulty {difficulty}");
        }
    }

    #[test]
    fn test_full_board_is_idempotent_noop() {
        let full = Board::from_string("XOX/XOO/OXX").unwrap();
        for difficulty in ALL {
            let mut rng = StdRng::seed_from_u64(17);
            let mut board = full;
            apply_computer_move(&mut board, Mark::O, difficulty, &mut rng);
            apply_computer_move(&mut board, Mark::O, difficulty, &mut rng);
            assert_eq!(board, full);
        }
    }
}

mod heuristic_priority {
    use super::*;

    /// Spec scenario: X threatens row 0, O threatens row 1, O to move.
    /// The win rule fires before the block rule, so O completes row 1 at
    /// (1,2) instead of blocking at (0,2).
    #[test]
    fn test_win_rule_beats_block_rule() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::from_string("XX./OO./...").unwrap();

        apply_computer_move(&mut board, Mark::O, Difficulty::Medium, &mut rng);

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
    fn test_blocks_when_no_win_available() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::from_string("XX./O../...").unwrap();

        apply_computer_move(&mut board, Mark::O, Difficulty::Medium, &mut rng);
        assert_eq!(board.get(0, 2), Cell::O);
    }
}

mod easy_randomness {
    use super::*;

    #[test]
    fn test_easy_only_writes_empty_cells() {
        let original = Board::from_string("XOX/OXO/...").unwrap();
        let mut rng = StdRng::seed_from_u64(123);

        for _ in 0..50 {
            let mut board = original;
            apply_computer_move(&mut board, Mark::O, Difficulty::Easy, &mut rng);
            for col in 0..3 {
                let was_empty = original.is_empty(2, col);
                if !was_empty {
                    assert_eq!(board.get(2, col), original.get(2, col));
                }
            }
            assert_eq!(board.occupied_count(), original.occupied_count() + 1);
        }
    }

    #[test]
    fn test_easy_eventually_covers_all_cells() {
        // With a fixed seed and plenty of trials, every empty cell of a
        // 3-cell position gets chosen at least once
        let original = Board::from_string("XOX/OXO/...").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let mut board = original;
            apply_computer_move(&mut board, Mark::O, Difficulty::Easy, &mut rng);
            for col in 0..3 {
                if board.get(2, col) == Cell::O {
                    seen[col] = true;
                }
            }
        }

        assert!(seen.iter().all(|&s| s), "uncovered cell after 200 trials");
    }
}
