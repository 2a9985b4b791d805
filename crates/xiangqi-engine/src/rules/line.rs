//! Chariot and cannon: straight-line movers.

use xiangqi_core::Square;

use crate::Board;

/// Any distance along a row or column with nothing in between.
pub(super) fn chariot(board: &Board, from: Square, to: Square) -> bool {
    board.count_between(from, to) == Some(0)
}

/// Moves like a chariot onto an empty square; captures by jumping exactly one
/// screen of either side.
pub(super) fn cannon(board: &Board, from: Square, to: Square) -> bool {
    let screens = if board.is_empty(to) { 0 } else { 1 };
    board.count_between(from, to) == Some(screens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn chariot_slides_until_blocked() {
        let pos = Position::startpos();
        assert!(chariot(pos.board(), sq(1, 1), sq(2, 1)));
        assert!(chariot(pos.board(), sq(1, 1), sq(3, 1)));
        assert!(!chariot(pos.board(), sq(1, 1), sq(5, 1)));
        assert!(!chariot(pos.board(), sq(1, 1), sq(2, 2)));
    }

    #[test]
    fn chariot_captures_first_piece_only() {
        let pos = Position::from_fen("4k4/9/9/9/9/9/9/9/9/R1n1K1p2 w").unwrap();
        assert!(chariot(pos.board(), sq(1, 1), sq(1, 3)));
        assert!(!chariot(pos.board(), sq(1, 1), sq(1, 7)));
    }

    #[test]
    fn cannon_quiet_move_needs_clear_path() {
        let pos = Position::startpos();
        assert!(cannon(pos.board(), sq(3, 2), sq(7, 2)));
        assert!(cannon(pos.board(), sq(3, 2), sq(3, 7)));
        // Path blocked by the other cannon.
        assert!(!cannon(pos.board(), sq(3, 2), sq(3, 9)));
    }

    #[test]
    fn cannon_capture_needs_exactly_one_screen_on_a_file() {
        // Column 5, from (1, 5) upward: targets at (4, 5), (6, 5) and (9, 5).
        let pos = Position::from_fen("5k3/4p4/9/9/4p4/9/4p4/9/9/3KC4 w").unwrap();
        let from = sq(1, 5);
        assert!(!cannon(pos.board(), from, sq(4, 5)), "zero screens");
        assert!(cannon(pos.board(), from, sq(6, 5)), "one screen");
        assert!(!cannon(pos.board(), from, sq(9, 5)), "two screens");
    }

    #[test]
    fn cannon_capture_needs_exactly_one_screen_on_a_rank() {
        let pos = Position::from_fen("3k5/9/9/9/9/C1P1p1r1r/9/9/9/5K3 w").unwrap();
        let from = sq(5, 1);
        assert!(!cannon(pos.board(), from, sq(5, 3)), "adjacent target has no screen");
        assert!(cannon(pos.board(), from, sq(5, 5)), "one screen");
        assert!(!cannon(pos.board(), from, sq(5, 7)), "two screens");
        assert!(!cannon(pos.board(), from, sq(5, 9)), "three screens");
        // A quiet move may not jump.
        assert!(!cannon(pos.board(), from, sq(5, 4)));
        assert!(cannon(pos.board(), from, sq(5, 2)));
    }

    #[test]
    fn cannon_rejects_diagonals() {
        let pos = Position::startpos();
        assert!(!cannon(pos.board(), sq(3, 2), sq(4, 3)));
    }
}
