//! The 3×3 board and cell indices.
//!
//! Cells are stored row-major: index 0 is the top-left corner, index 8 the
//! bottom-right. A cell is `None` while empty and `Some(mark)` once played.
//!
//! Boards have a compact text form used by tests and debugging:
//!
//! ```
//! use tictactoe_engine::core::{Board, Mark};
//!
//! let board: Board = "XO. .X. ..O".parse().unwrap();
//! assert_eq!(board.get(0), Some(Mark::X));
//! assert_eq!(board.get(2), None);
//! assert_eq!(board.to_string(), "X|O|.\n.|X|.\n.|.|O");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{Error, Result};
use super::mark::Mark;

/// Number of cells on a board.
pub const CELL_COUNT: usize = 9;

/// Width (and height) of the grid.
pub const SIDE: usize = 3;

/// A validated cell index in `0..9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIndex(u8);

impl CellIndex {
    /// Validate a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Validate a raw index, reporting the failure.
    pub fn try_new(index: usize) -> Result<Self> {
        Self::new(index).ok_or(Error::CellOutOfRange { index })
    }

    /// Index from row and column.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Option<Self> {
        if row < SIDE && col < SIDE {
            Some(Self((row * SIDE + col) as u8))
        } else {
            None
        }
    }

    /// Raw index (0-8).
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Row, top to bottom.
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / SIDE
    }

    /// Column, left to right.
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % SIDE
    }

    /// All nine indices in order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT as u8).map(CellIndex)
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A board snapshot.
///
/// Boards are small and `Copy`: every move record in the history is a full
/// snapshot rather than a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get a cell by raw index. Out-of-range indices read as empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Get a cell by validated index.
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Option<Mark> {
        self.cells[index.get()]
    }

    /// Check if a cell is empty.
    #[must_use]
    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        self.cells[index.get()].is_none()
    }

    /// Return a copy of this board with `mark` placed at `index`.
    ///
    /// Does not check occupancy; the rules do that.
    #[must_use]
    pub fn with_mark(mut self, index: CellIndex, mark: Mark) -> Self {
        self.cells[index.get()] = Some(mark);
        self
    }

    /// Raw cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Indices of empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        CellIndex::all().filter(|&i| self.is_empty_at(i))
    }

    /// Number of marks placed.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of marks of one kind.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled_count() == CELL_COUNT
    }

    /// Check if no cell is occupied.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.filled_count() == 0
    }

    /// Indices where this board and `other` differ.
    pub fn diff<'a>(&'a self, other: &'a Board) -> impl Iterator<Item = CellIndex> + 'a {
        CellIndex::all().filter(move |&i| self.cell(i) != other.cell(i))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, "|")?;
                }
                let symbol = self.cells[row * SIDE + col].map_or('.', Mark::symbol);
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell characters. Whitespace is ignored, so rows may be
    /// separated by spaces or newlines; empty cells are `.`, `-` or `_`.
    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if symbols.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: symbols.len(),
            });
        }

        let mut cells = [None; CELL_COUNT];
        for (position, (cell, character)) in cells.iter_mut().zip(symbols).enumerate() {
            *cell = match character {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                    })
                }
            };
        }

        Ok(Self { cells })
    }
}
