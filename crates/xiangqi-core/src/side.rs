//! Player side representation.

use crate::Square;

/// The two players in xiangqi. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Side {
    Red = 0,
    Black = 1,
}

impl Side {
    /// Both sides, Red first.
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Returns the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row step toward the enemy (+1 for Red, -1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Black => -1,
        }
    }

    /// Returns true if `row` lies on this side's half of the river.
    #[inline]
    pub const fn owns_row(self, row: u8) -> bool {
        match self {
            Side::Red => row <= 5,
            Side::Black => row >= 6,
        }
    }

    /// Returns true if the square lies inside this side's palace.
    #[inline]
    pub const fn palace_contains(self, sq: Square) -> bool {
        let col = sq.col();
        let row = sq.row();
        let rows = match self {
            Side::Red => row <= 3,
            Side::Black => row >= 8,
        };
        rows && col >= 4 && col <= 6
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}
