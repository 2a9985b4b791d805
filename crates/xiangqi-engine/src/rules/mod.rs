//! Piece movement rules.
//!
//! Every piece kind has a pure predicate over `(board, from, to)`. The
//! predicates only look at board occupancy; whose turn it is and whether the
//! move exposes a general are decided elsewhere
//! (see [`resolver`](crate::resolver)).

mod elephant;
mod horse;
mod line;
mod palace;
mod soldier;

pub use elephant::elephant_steps;

use crate::Board;
use xiangqi_core::{PieceKind, Side, Square};

/// Terminal status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// The game is still being played.
    #[default]
    Ongoing,
    /// Red checkmated Black (or Black was stalemated under a losing-stalemate rule).
    RedWon,
    /// Black checkmated Red (or Red was stalemated under a losing-stalemate rule).
    BlackWon,
}

impl GameState {
    /// Returns the state in which `side` has won.
    #[inline]
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Red => GameState::RedWon,
            Side::Black => GameState::BlackWon,
        }
    }

    /// Returns true once a winner has been recorded.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }

    /// Returns the winning side, if any.
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameState::Ongoing => None,
            GameState::RedWon => Some(Side::Red),
            GameState::BlackWon => Some(Side::Black),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Ongoing => write!(f, "ongoing"),
            GameState::RedWon => write!(f, "red won"),
            GameState::BlackWon => write!(f, "black won"),
        }
    }
}

/// Returns true if the piece on `from` may move to `to` by its own movement rule.
///
/// The caller guarantees that `from` is occupied and that `to` does not hold
/// a piece of the same side. Returns false when `from` is empty.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    match piece.kind {
        PieceKind::General => palace::general(piece.side, from, to),
        PieceKind::Adviser => palace::adviser(piece.side, from, to),
        PieceKind::Elephant => elephant::elephant(board, piece.side, from, to),
        PieceKind::Horse => horse::horse(board, from, to),
        PieceKind::Chariot => line::chariot(board, from, to),
        PieceKind::Cannon => line::cannon(board, from, to),
        PieceKind::Soldier => soldier::soldier(piece.side, from, to),
    }
}

/// Returns true if the piece on `from` can reach `to`, occupancy included.
///
/// This is the shared gate used by move validation, the attack engine and the
/// mate search: `from` must be occupied, `to` must differ from `from` and must
/// not hold a piece of the mover's side, and the piece predicate must hold.
pub fn can_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.side_at(from) else {
        return false;
    };
    if from == to || board.side_at(to) == Some(mover) {
        return false;
    }
    is_legal(board, from, to)
}

/// Row and column distance between two squares, as signed deltas.
#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}
