//! Square set representation.
//!
//! A square set is a 128-bit integer where each of the low 90 bits represents
//! a square on the xiangqi board. The attack engine returns these.

use std::fmt;
use xiangqi_core::Square;

/// A set of board squares packed into a `u128`.
///
/// Bit 0 = row 1 column 1, bit 8 = row 1 column 9, bit 89 = row 10 column 9.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct SquareSet(u128);

impl SquareSet {
    /// Empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u128 << sq.index())) != 0
    }

    /// Adds the given square.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    /// Pops and returns the lowest-indexed square.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Square::from_index(idx)
        }
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SquareSet({:#025x})", self.0)?;
        for row in (1..=Square::ROWS).rev() {
            write!(f, "{:>2} ", row)?;
            for col in 1..=Square::COLS {
                match Square::new(row, col) {
                    Some(sq) if self.contains(sq) => write!(f, "X ")?,
                    _ => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h i")
    }
}

/// Iterator over the squares in a set, lowest index first.
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn insert_and_count() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.insert(sq(5, 5));
        set.insert(sq(10, 9));
        set.insert(sq(5, 5));
        assert_eq!(set.count(), 2);
        assert!(set.contains(sq(10, 9)));
        assert!(!set.contains(sq(1, 1)));
    }

    #[test]
    fn iterates_in_index_order() {
        let set: SquareSet = [sq(10, 9), sq(1, 1), sq(6, 3)].into_iter().collect();
        let squares: Vec<Square> = set.into_iter().collect();
        assert_eq!(squares, vec![sq(1, 1), sq(6, 3), sq(10, 9)]);
    }
}
