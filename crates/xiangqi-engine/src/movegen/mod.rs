//! Move generation.
//!
//! Legal moves are produced by running the piece predicates over every
//! `(piece, destination)` pair of a side and keeping the ones whose trial
//! position does not expose the mover's general.

mod attacks;
pub mod perft;

use crate::rules::can_move;
use crate::{resolver, Position};
use xiangqi_core::{Move, Side, Square};

pub use attacks::{attacked_squares, is_square_attacked};
pub use perft::{perft, perft_divide};

/// A list of generated moves.
///
/// The standard set of pieces never has more than a few dozen moves, but
/// positions loaded from FEN may carry any number of pieces, so the list
/// grows as needed.
#[derive(Clone, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Initial capacity; the list grows past it when needed.
    const INITIAL_CAPACITY: usize = 64;

    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if the list holds the given move.
    #[inline]
    pub fn contains(&self, m: Move) -> bool {
        self.moves.contains(&m)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns every move the piece predicates allow for `side`, ignoring
/// whether the mover's general ends up exposed.
pub fn pseudo_legal_moves(position: &Position, side: Side) -> MoveList {
    let board = position.board();
    let mut moves = MoveList::new();
    for from in position.roster().squares(side) {
        for to in Square::all() {
            if can_move(board, from, to) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Generates all legal moves for `side`.
///
/// Each candidate is tried on `position` and rolled back; the position is
/// unchanged when this returns.
pub fn generate_moves(position: &mut Position, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    for &m in &pseudo_legal_moves(position, side) {
        let safe = position.trial(m.from(), m.to(), |p| !resolver::is_self_exposed(p, side));
        if safe == Some(true) {
            moves.push(m);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Move::new(sq(4, 5), sq(5, 5));
        let m2 = Move::new(sq(3, 8), sq(3, 5));
        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert!(list.contains(m2));
        assert_eq!(list.into_iter().count(), 2);
    }

    #[test]
    fn movelist_default() {
        let list = MoveList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn generate_moves_startpos() {
        let mut position = Position::startpos();
        assert_eq!(generate_moves(&mut position, Side::Red).len(), 44);
        assert_eq!(generate_moves(&mut position, Side::Black).len(), 44);
        assert_eq!(position, Position::startpos());
    }

    #[test]
    fn pinned_piece_cannot_leave_the_file() {
        // The red chariot on (5, 5) is all that separates the generals.
        let mut position = Position::from_fen("4k4/9/9/9/9/4R4/9/9/9/4K4 w").unwrap();
        let moves = generate_moves(&mut position, Side::Red);
        assert!(moves.contains(Move::new(sq(5, 5), sq(9, 5))));
        assert!(!moves.contains(Move::new(sq(5, 5), sq(5, 1))));
        assert!(moves
            .as_slice()
            .iter()
            .filter(|m| m.from() == sq(5, 5))
            .all(|m| m.to().col() == 5));
    }

    // Red horses on every square with odd row + column; generals on even ones.
    const HORSE_SWARM: &str =
        "N1NkN1N1N/1N1N1N1N1/N1N1N1N1N/1N1N1N1N1/N1N1N1N1N/1N1N1N1N1/N1N1N1N1N/1N1N1N1N1/N1N1N1N1N/1N1NKN1N1 w";

    #[test]
    fn crowded_position_does_not_overflow() {
        let mut position = Position::from_fen(HORSE_SWARM).unwrap();
        // Every horse leg is an even square and therefore empty.
        assert_eq!(pseudo_legal_moves(&position, Side::Red).len(), 246);
        assert_eq!(generate_moves(&mut position, Side::Red).len(), 246);
    }

    #[test]
    fn pseudo_legal_includes_exposing_moves() {
        let position = Position::from_fen("4k4/9/9/9/9/4R4/9/9/9/4K4 w").unwrap();
        let moves = pseudo_legal_moves(&position, Side::Red);
        assert!(moves.contains(Move::new(sq(5, 5), sq(5, 1))));
    }
}
