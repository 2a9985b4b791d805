//! The 10x9 board grid.

use xiangqi_core::{Piece, PieceKind, Side, Square};

use crate::SquareSet;

/// Stable identity of a piece for the lifetime of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    /// Returns the index of this piece in its roster.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The content of an occupied cell: which piece sits there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub id: PieceId,
    pub piece: Piece,
}

/// Read-only grid handed to rendering layers, indexed `[row - 1][col - 1]`.
pub type Snapshot = [[Option<Piece>; Square::COLS as usize]; Square::ROWS as usize];

/// Fixed grid of cells, each empty or holding exactly one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Occupant>; Square::COUNT],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Returns the occupant of the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Occupant> {
        self.cells[sq.index() as usize]
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.get(sq).map(|occupant| occupant.piece)
    }

    /// Returns the owner of the piece on the given square, if any.
    #[inline]
    pub fn side_at(&self, sq: Square) -> Option<Side> {
        self.piece_at(sq).map(|piece| piece.side)
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Replaces the content of a cell, returning what was there.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, content: Option<Occupant>) -> Option<Occupant> {
        std::mem::replace(&mut self.cells[sq.index() as usize], content)
    }

    /// Returns the set of occupied squares.
    pub fn occupied(&self) -> SquareSet {
        Square::all().filter(|&sq| !self.is_empty(sq)).collect()
    }

    /// Iterates over every occupied square with its occupant.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|occupant| (sq, occupant)))
    }

    /// Counts the pieces strictly between two squares on a shared row or column.
    ///
    /// Returns `None` when the squares are equal or not on a straight line.
    pub fn count_between(&self, from: Square, to: Square) -> Option<usize> {
        if from == to {
            return None;
        }
        let d_row = (to.row() as i8 - from.row() as i8).signum();
        let d_col = (to.col() as i8 - from.col() as i8).signum();
        if d_row != 0 && d_col != 0 {
            return None;
        }

        let mut count = 0;
        let mut sq = from.offset(d_row, d_col)?;
        while sq != to {
            if !self.is_empty(sq) {
                count += 1;
            }
            sq = sq.offset(d_row, d_col)?;
        }
        Some(count)
    }

    /// Finds the general of the given side by scanning its palace.
    pub fn find_general(&self, side: Side) -> Option<Square> {
        Square::all()
            .filter(|&sq| side.palace_contains(sq))
            .find(|&sq| self.piece_at(sq) == Some(Piece::new(PieceKind::General, side)))
    }

    /// Returns a read-only copy of the grid for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let mut grid: Snapshot = [[None; Square::COLS as usize]; Square::ROWS as usize];
        for (sq, occupant) in self.occupants() {
            grid[sq.row() as usize - 1][sq.col() as usize - 1] = Some(occupant.piece);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
