//! General and adviser: single steps confined to the palace.

use xiangqi_core::{Side, Square};

use super::deltas;

/// One orthogonal step, staying in the palace.
pub(super) fn general(side: Side, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() + d_col.abs() == 1 && side.palace_contains(to)
}

/// One diagonal step, staying in the palace.
pub(super) fn adviser(side: Side, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() == 1 && d_col.abs() == 1 && side.palace_contains(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn general_steps_orthogonally() {
        assert!(general(Side::Red, sq(1, 5), sq(2, 5)));
        assert!(general(Side::Red, sq(1, 5), sq(1, 4)));
        assert!(!general(Side::Red, sq(1, 5), sq(2, 6)));
        assert!(!general(Side::Red, sq(1, 5), sq(3, 5)));
    }

    #[test]
    fn general_stays_in_palace() {
        assert!(!general(Side::Red, sq(3, 5), sq(4, 5)));
        assert!(!general(Side::Red, sq(2, 4), sq(2, 3)));
        assert!(!general(Side::Black, sq(8, 5), sq(7, 5)));
        assert!(general(Side::Black, sq(8, 5), sq(9, 5)));
    }

    #[test]
    fn adviser_steps_diagonally() {
        assert!(adviser(Side::Red, sq(1, 4), sq(2, 5)));
        assert!(!adviser(Side::Red, sq(1, 4), sq(1, 5)));
        assert!(!adviser(Side::Red, sq(2, 5), sq(4, 7)));
        assert!(adviser(Side::Black, sq(10, 6), sq(9, 5)));
    }

    #[test]
    fn adviser_stays_in_palace() {
        assert!(adviser(Side::Red, sq(2, 5), sq(3, 4)));
        assert!(!adviser(Side::Red, sq(3, 4), sq(4, 5)));
        assert!(!adviser(Side::Black, sq(8, 4), sq(7, 3)));
    }

    #[test]
    fn no_destination_outside_palace_is_ever_legal() {
        for side in Side::ALL {
            for from in Square::all().filter(|&s| side.palace_contains(s)) {
                for to in Square::all().filter(|&s| !side.palace_contains(s)) {
                    assert!(!general(side, from, to));
                    assert!(!adviser(side, from, to));
                }
            }
        }
    }
}
