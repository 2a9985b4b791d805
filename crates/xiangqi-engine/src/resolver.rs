//! Check, checkmate and stalemate detection.
//!
//! Everything here is evaluated on the live position. The search routines
//! take `&mut Position` because they apply trial moves, but every trial is
//! rolled back before they return.

use std::fmt;

use xiangqi_core::{Move, Side, Square};

use crate::movegen::is_square_attacked;
use crate::rules::can_move;
use crate::Position;

/// What a committed move did to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The opponent is not in check and has a legal reply.
    Quiet,
    /// The opponent is in check and has at least one escape.
    Check,
    /// The opponent is in check and has no legal reply.
    Checkmate,
    /// The opponent is not in check but has no legal reply.
    Stalemate,
}

impl MoveOutcome {
    /// Returns true if the opponent has no legal reply.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::Checkmate | MoveOutcome::Stalemate)
    }

    /// Returns true if the opponent was left in check.
    #[inline]
    pub const fn gives_check(self) -> bool {
        matches!(self, MoveOutcome::Check | MoveOutcome::Checkmate)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Quiet => write!(f, "quiet"),
            MoveOutcome::Check => write!(f, "check"),
            MoveOutcome::Checkmate => write!(f, "checkmate"),
            MoveOutcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Returns true if both generals stand on one column with nothing between them.
pub fn generals_facing(position: &Position) -> bool {
    match (
        position.general_square(Side::Red),
        position.general_square(Side::Black),
    ) {
        (Some(red), Some(black)) => {
            red.col() == black.col() && position.board().count_between(red, black) == Some(0)
        }
        _ => false,
    }
}

/// Returns true if the general of `side` is attacked by the other side.
///
/// Facing generals do not count as check here; that case can only arise as
/// self-exposure and is rejected before a move is committed.
pub fn is_in_check(position: &Position, side: Side) -> bool {
    position
        .general_square(side)
        .is_some_and(|sq| is_square_attacked(position, sq, side.opposite()))
}

/// Returns true if `side` has left its general capturable or facing the
/// other general.
///
/// A side without a general on the board is always exposed.
pub fn is_self_exposed(position: &Position, side: Side) -> bool {
    let Some(general) = position.general_square(side) else {
        return true;
    };
    is_square_attacked(position, general, side.opposite()) || generals_facing(position)
}

/// Searches for one move of `side` that leaves its general safe.
///
/// Stops at the first escape found. Returns `None` only after every
/// `(piece, destination)` pair the movement rules allow has been tried.
pub fn find_escape(position: &mut Position, side: Side) -> Option<Move> {
    let origins: Vec<Square> = position.roster().squares(side);
    for from in origins {
        for to in Square::all() {
            if !can_move(position.board(), from, to) {
                continue;
            }
            let safe = position.trial(from, to, |p| !is_self_exposed(p, side));
            if safe == Some(true) {
                tracing::trace!(%side, %from, %to, "escape found");
                return Some(Move::new(from, to));
            }
        }
    }
    tracing::trace!(%side, "no escape");
    None
}

/// Returns true if `side` has at least one legal move.
#[inline]
pub fn has_legal_response(position: &mut Position, side: Side) -> bool {
    find_escape(position, side).is_some()
}

/// Classifies the position from the point of view of `side`, the side
/// about to move.
pub fn classify(position: &mut Position, side: Side) -> MoveOutcome {
    let in_check = is_in_check(position, side);
    match (in_check, has_legal_response(position, side)) {
        (false, true) => MoveOutcome::Quiet,
        (true, true) => MoveOutcome::Check,
        (true, false) => MoveOutcome::Checkmate,
        (false, false) => MoveOutcome::Stalemate,
    }
}
