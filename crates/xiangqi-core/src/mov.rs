//! Move representation.

use crate::Square;
use std::fmt;

/// A xiangqi move: a source and destination square.
///
/// Encoded compactly: 7 bits from, 7 bits to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 7))
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x7F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 7) & 0x7F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from(), self.to())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from(), self.to())
    }
}
