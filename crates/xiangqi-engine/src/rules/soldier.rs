//! Soldier: one step forward; one step sideways as well once across the river.

use xiangqi_core::{Side, Square};

use super::deltas;

pub(super) fn soldier(side: Side, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    if d_col == 0 {
        return d_row == side.forward();
    }
    let crossed = !side.owns_row(from.row());
    crossed && d_row == 0 && d_col.abs() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn red_before_river_only_forward() {
        assert!(soldier(Side::Red, sq(4, 3), sq(5, 3)));
        assert!(soldier(Side::Red, sq(5, 3), sq(6, 3)));
        assert!(!soldier(Side::Red, sq(5, 3), sq(5, 4)));
        assert!(!soldier(Side::Red, sq(5, 3), sq(5, 2)));
        assert!(!soldier(Side::Red, sq(4, 3), sq(3, 3)));
    }

    #[test]
    fn red_after_river_forward_or_sideways() {
        assert!(soldier(Side::Red, sq(6, 3), sq(7, 3)));
        assert!(soldier(Side::Red, sq(6, 3), sq(6, 4)));
        assert!(soldier(Side::Red, sq(6, 3), sq(6, 2)));
        assert!(!soldier(Side::Red, sq(6, 3), sq(5, 3)));
        assert!(!soldier(Side::Red, sq(6, 3), sq(6, 5)));
        assert!(!soldier(Side::Red, sq(6, 3), sq(7, 4)));
    }

    #[test]
    fn black_mirrors_red() {
        assert!(soldier(Side::Black, sq(7, 5), sq(6, 5)));
        assert!(!soldier(Side::Black, sq(6, 5), sq(6, 4)));
        assert!(soldier(Side::Black, sq(5, 5), sq(5, 4)));
        assert!(soldier(Side::Black, sq(5, 5), sq(4, 5)));
        assert!(!soldier(Side::Black, sq(5, 5), sq(6, 5)));
    }

    #[test]
    fn never_moves_two_squares() {
        assert!(!soldier(Side::Red, sq(4, 1), sq(6, 1)));
        assert!(!soldier(Side::Black, sq(3, 5), sq(3, 7)));
    }
}
