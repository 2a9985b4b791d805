//! Attack sets: every square a side could currently move a piece onto.

use xiangqi_core::{Side, Square};

use crate::rules::can_move;
use crate::{Position, SquareSet};

/// Returns every square `side` threatens on the current board.
///
/// A square is threatened when any on-board piece of `side` may legally move
/// onto it by its own movement rule. Squares held by `side` itself are never
/// included. Whether the move would expose the mover's own general is not
/// considered.
pub fn attacked_squares(position: &Position, side: Side) -> SquareSet {
    let board = position.board();
    let mut attacked = SquareSet::EMPTY;
    for from in position.roster().squares(side) {
        for to in Square::all() {
            if can_move(board, from, to) {
                attacked.insert(to);
            }
        }
    }
    attacked
}

/// Returns true if `sq` is in `attacked_squares(position, by)`.
///
/// This is the short-circuit form of [`attacked_squares`]: it stops at the
/// first attacker instead of building the whole set. Check detection uses it.
pub fn is_square_attacked(position: &Position, sq: Square, by: Side) -> bool {
    let board = position.board();
    position
        .roster()
        .squares(by)
        .into_iter()
        .any(|from| can_move(board, from, sq))
}
