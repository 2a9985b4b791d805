//! Horse: a (1,2) or (2,1) leap, hobbled by a piece on the square next to the
//! origin along the long leg.

use xiangqi_core::Square;

use super::deltas;
use crate::Board;

pub(super) fn horse(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let leg = match (d_row.abs(), d_col.abs()) {
        (2, 1) => from.offset(d_row.signum(), 0),
        (1, 2) => from.offset(0, d_col.signum()),
        _ => return false,
    };
    leg.is_some_and(|sq| board.is_empty(sq))
}
