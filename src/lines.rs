//! Winning line analysis: outcome evaluation and terminal scoring

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Mark, SIDE};

/// Score returned by [`score`] when the given mark has completed a line.
pub const WIN_SCORE: i32 = 10;

/// One of the two diagonals on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    /// Top-left to bottom-right
    Main,
    /// Top-right to bottom-left
    Anti,
}

/// A completed three-in-a-row line.
///
/// Identifies the line by kind and index so a presentation layer can derive
/// the screen coordinates of a win indicator via [`WinLine::cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinLine {
    Row(usize),
    Column(usize),
    Diagonal(Diagonal),
}

impl WinLine {
    /// The three coordinates making up this line, in reading order
    pub fn cells(self) -> [Coord; 3] {
        match self {
            WinLine::Row(row) => [(row, 0), (row, 1), (row, 2)],
            WinLine::Column(col) => [(0, col), (1, col), (2, col)],
            WinLine::Diagonal(Diagonal::Main) => [(0, 0), (1, 1), (2, 2)],
            WinLine::Diagonal(Diagonal::Anti) => [(0, 2), (1, 1), (2, 0)],
        }
    }
}

/// Terminal outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line
    Win { mark: Mark, line: WinLine },
    /// Full board without a completed line
    Draw,
}

impl Outcome {
    /// The winning mark, if any
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(mark),
            Outcome::Draw => None,
        }
    }
}

/// Check whether three coordinates hold the same mark
fn line_winner(board: &Board, cells: [Coord; 3]) -> Option<Mark> {
    let (r0, c0) = cells[0];
    let first = board.get(r0, c0).to_mark()?;
    let complete = cells[1..]
        .iter()
        .all(|&(r, c)| board.get(r, c).to_mark() == Some(first));
    complete.then_some(first)
}

/// Evaluate the board for a terminal outcome.
///
/// Checks the three rows, then the three columns, then the two diagonals;
/// the first complete line found wins. In a legal position at most one line
/// can be complete, so the check order only decides which code path fires.
/// A full board without a complete line is a draw; anything else returns
/// `None` (game still in progress).
pub fn evaluate(board: &Board) -> Option<Outcome> {
    for row in 0..SIDE {
        if let Some(mark) = line_winner(board, WinLine::Row(row).cells()) {
            return Some(Outcome::Win {
                mark,
                line: WinLine::Row(row),
            });
        }
    }

    for col in 0..SIDE {
        if let Some(mark) = line_winner(board, WinLine::Column(col).cells()) {
            return Some(Outcome::Win {
                mark,
                line: WinLine::Column(col),
            });
        }
    }

    for diagonal in [Diagonal::Main, Diagonal::Anti] {
        if let Some(mark) = line_winner(board, WinLine::Diagonal(diagonal).cells()) {
            return Some(Outcome::Win {
                mark,
                line: WinLine::Diagonal(diagonal),
            });
        }
    }

    if board.is_full() {
        return Some(Outcome::Draw);
    }

    None
}

/// Check if a mark has completed any line
pub fn has_won(board: &Board, mark: Mark) -> bool {
    evaluate(board).and_then(Outcome::winner) == Some(mark)
}

/// Terminal scoring function for the search engine.
///
/// Returns `+10` if `mark` has completed a line, `-10` if its opponent has,
/// and `0` otherwise, including draws and non-terminal positions.
pub fn score(board: &Board, mark: Mark) -> i32 {
    match evaluate(board).and_then(Outcome::winner) {
        Some(winner) if winner == mark => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}
