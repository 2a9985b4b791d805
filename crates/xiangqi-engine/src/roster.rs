//! Per-side piece bookkeeping.
//!
//! Every piece of a position gets a [`PieceId`] when it is placed and keeps it
//! for the life of the position. A piece is always in exactly one of two sets:
//! its side's on-board set or its side's captured list. Only
//! [`Position::apply`](crate::Position::apply) and
//! [`Position::rollback`](crate::Position::rollback) move pieces between them.

use std::collections::BTreeSet;

use xiangqi_core::{Piece, PieceKind, Side, Square};

use crate::board::PieceId;

/// A piece together with the square it was last placed on.
///
/// For a captured piece the square is where it was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRecord {
    pub piece: Piece,
    pub square: Square,
}

/// On-board and captured pieces for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    records: Vec<PieceRecord>,
    on_board: [BTreeSet<PieceId>; 2],
    captured: [Vec<PieceId>; 2],
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new on-board piece and returns its identity.
    pub(crate) fn add(&mut self, piece: Piece, square: Square) -> PieceId {
        let id = PieceId(self.records.len() as u8);
        self.records.push(PieceRecord { piece, square });
        self.on_board[piece.side.index()].insert(id);
        id
    }

    /// Returns the record for a piece.
    #[inline]
    pub fn record(&self, id: PieceId) -> PieceRecord {
        self.records[id.index()]
    }

    /// Total number of pieces ever placed, on board or captured.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no piece has been placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub(crate) fn set_square(&mut self, id: PieceId, square: Square) {
        self.records[id.index()].square = square;
    }

    /// Iterates over a side's on-board pieces in id order.
    pub fn on_board(&self, side: Side) -> impl Iterator<Item = PieceId> + '_ {
        self.on_board[side.index()].iter().copied()
    }

    /// Returns the squares of a side's on-board pieces.
    pub fn squares(&self, side: Side) -> Vec<Square> {
        self.on_board(side).map(|id| self.record(id).square).collect()
    }

    /// Returns a side's captured pieces in capture order.
    pub fn captured(&self, side: Side) -> &[PieceId] {
        &self.captured[side.index()]
    }

    /// Returns true if the piece is currently captured.
    pub fn is_captured(&self, id: PieceId) -> bool {
        let side = self.record(id).piece.side;
        !self.on_board[side.index()].contains(&id)
    }

    /// Returns the square of a side's general, if it is on the board.
    pub fn general(&self, side: Side) -> Option<Square> {
        self.on_board(side)
            .map(|id| self.record(id))
            .find(|record| record.piece.kind == PieceKind::General)
            .map(|record| record.square)
    }

    /// Moves a piece from its side's on-board set to the captured list.
    pub(crate) fn capture(&mut self, id: PieceId) {
        let side = self.record(id).piece.side.index();
        if self.on_board[side].remove(&id) {
            self.captured[side].push(id);
        }
    }

    /// Reverses [`capture`](Self::capture) for the given piece.
    pub(crate) fn restore(&mut self, id: PieceId) {
        let side = self.record(id).piece.side.index();
        if let Some(pos) = self.captured[side].iter().rposition(|&c| c == id) {
            self.captured[side].remove(pos);
            self.on_board[side].insert(id);
        }
    }
}
