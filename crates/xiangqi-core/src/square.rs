//! Board square representation.

use std::fmt;

/// A square on the 10x9 xiangqi board.
///
/// Rows run 1-10 from Red's back rank to Black's, columns run 1-9. Internally
/// squares are indexed row-major from 0 (row 1, column 1) to 89 (row 10,
/// column 9).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Number of rows on the board.
    pub const ROWS: u8 = 10;
    /// Number of columns on the board.
    pub const COLS: u8 = 9;
    /// Number of squares on the board.
    pub const COUNT: usize = (Self::ROWS as usize) * (Self::COLS as usize);

    /// Creates a square from a 1-based row and column.
    ///
    /// Returns `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= 1 && row <= Self::ROWS && col >= 1 && col <= Self::COLS {
            Some(Square((row - 1) * Self::COLS + (col - 1)))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, rejecting anything off the board.
    #[inline]
    pub fn from_coords(row: i32, col: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Creates a square from index (0-89).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns the index (0-89).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the 1-based row.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::COLS + 1
    }

    /// Returns the 1-based column.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::COLS + 1
    }

    /// Returns the square shifted by the given row and column deltas, if it
    /// stays on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 1 || col < 1 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Iterates over every square in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Returns the label used in log output (e.g. "e1", "e10").
    pub fn label(self) -> String {
        format!("{}{}", (b'a' + self.col() - 1) as char, self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.label())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
