//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board side length. The engine only supports the classic 3x3 game.
pub const SIDE: usize = 3;

/// A (row, column) coordinate identifying a cell on the board.
pub type Coord = (usize, usize);

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Convert an occupied cell to its mark
    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// The symbol a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// 3x3 board of cells.
///
/// This type implements `Copy` since it is only 9 bytes; the search engine
/// relies on cheap copies for its provisional placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIDE]; SIDE],
        }
    }

    /// Create a board from a string of 9 cell characters.
    ///
    /// Whitespace and `/` row separators are filtered out, so both
    /// `"XX./OO./..."` and `"XX. OO. ..."` parse. `.`, `_`, `X`/`x` and
    /// `O`/`o`/`0` are valid cell characters.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 cell characters remain after
    /// filtering, or if any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if chars.len() != SIDE * SIDE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIDE * SIDE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / SIDE][i % SIDE] = cell;
        }

        Ok(board)
    }

    /// Get the cell at a coordinate
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Write a cell at a coordinate.
    ///
    /// Writing over an occupied cell is a caller precondition violation the
    /// board does not defend against; the session layer validates moves
    /// before placing, and the selectors only write to cells they just
    /// enumerated as empty.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Check if a coordinate is empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&c| c != Cell::Empty))
    }

    /// Count occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != Cell::Empty)
            .count()
    }

    /// Get every empty coordinate in row-major order.
    ///
    /// The ordering is part of the contract: the selectors tie-break on the
    /// first matching coordinate, so enumeration must be deterministic.
    pub fn available_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..SIDE {
            for col in 0..SIDE {
                if self.cells[row][col] == Cell::Empty {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    /// Clear every cell back to empty
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIDE]; SIDE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < SIDE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
