//! Elephant: two diagonal steps between the seven elephant points of its own
//! half, blocked by a piece on the midpoint ("elephant eye").

use xiangqi_core::{Side, Square};

use crate::Board;

/// `(origin, [(destination, eye)])` in (row, column) form.
///
/// The diagonal lattice is irregular at the edges, so the reachable points
/// are listed explicitly rather than computed.
type Step = ((u8, u8), (u8, u8));

const ELEPHANT_TABLE: [((u8, u8), &[Step]); 14] = [
    // Red half
    ((1, 3), &[((3, 1), (2, 2)), ((3, 5), (2, 4))]),
    ((1, 7), &[((3, 5), (2, 6)), ((3, 9), (2, 8))]),
    ((3, 1), &[((1, 3), (2, 2)), ((5, 3), (4, 2))]),
    (
        (3, 5),
        &[
            ((1, 3), (2, 4)),
            ((1, 7), (2, 6)),
            ((5, 3), (4, 4)),
            ((5, 7), (4, 6)),
        ],
    ),
    ((3, 9), &[((1, 7), (2, 8)), ((5, 7), (4, 8))]),
    ((5, 3), &[((3, 1), (4, 2)), ((3, 5), (4, 4))]),
    ((5, 7), &[((3, 5), (4, 6)), ((3, 9), (4, 8))]),
    // Black half
    ((6, 3), &[((8, 1), (7, 2)), ((8, 5), (7, 4))]),
    ((6, 7), &[((8, 5), (7, 6)), ((8, 9), (7, 8))]),
    ((8, 1), &[((6, 3), (7, 2)), ((10, 3), (9, 2))]),
    (
        (8, 5),
        &[
            ((6, 3), (7, 4)),
            ((6, 7), (7, 6)),
            ((10, 3), (9, 4)),
            ((10, 7), (9, 6)),
        ],
    ),
    ((8, 9), &[((6, 7), (7, 8)), ((10, 7), (9, 8))]),
    ((10, 3), &[((8, 1), (9, 2)), ((8, 5), (9, 4))]),
    ((10, 7), &[((8, 5), (9, 6)), ((8, 9), (9, 8))]),
];

/// Returns the `(destination, eye)` pairs listed for an elephant standing on
/// `from`. Squares that are not elephant points have no steps.
pub fn elephant_steps(from: Square) -> impl Iterator<Item = (Square, Square)> {
    let origin = (from.row(), from.col());
    ELEPHANT_TABLE
        .iter()
        .find(|(point, _)| *point == origin)
        .map(|(_, steps)| *steps)
        .unwrap_or(&[])
        .iter()
        .filter_map(|&((to_row, to_col), (eye_row, eye_col))| {
            Some((Square::new(to_row, to_col)?, Square::new(eye_row, eye_col)?))
        })
}

pub(super) fn elephant(board: &Board, side: Side, from: Square, to: Square) -> bool {
    if !side.owns_row(to.row()) {
        return false;
    }
    elephant_steps(from)
        .find(|&(dest, _)| dest == to)
        .is_some_and(|(_, eye)| board.is_empty(eye))
}
