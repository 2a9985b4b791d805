//! Xiangqi position representation and the move mutator.

use xiangqi_core::{FenError, FenParser, Piece, Side, Square};

use crate::board::{Board, Occupant, PieceId, Snapshot};
use crate::Roster;

/// Everything needed to reverse one [`Position::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an applied move must be rolled back or committed"]
pub struct Undo {
    /// Square the piece moved from.
    pub from: Square,
    /// Square the piece moved to.
    pub to: Square,
    /// The piece that moved.
    pub moved: Occupant,
    /// The piece that stood on `to`, if any.
    pub captured: Option<Occupant>,
}

impl Undo {
    /// Returns the captured piece, if the move was a capture.
    #[inline]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured.map(|occupant| occupant.piece)
    }
}

/// Board, roster and side to move.
///
/// The board and the roster always agree: every on-board piece occupies
/// exactly one cell and that cell refers back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    roster: Roster,

    /// The side to move.
    pub side_to_move: Side,
}

impl Position {
    /// Creates an empty position with Red to move.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            roster: Roster::new(),
            side_to_move: Side::Red,
        }
    }

    /// Creates the standard 32-piece starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        FenParser::parse(fen).map(Self::from_parsed)
    }

    fn from_parsed(parsed: FenParser) -> Self {
        let mut position = Position::empty();
        for (sq, piece) in parsed.placements {
            position.place(sq, piece);
        }
        position.side_to_move = parsed.side_to_move;
        position
    }

    /// Puts a new piece on an empty square.
    fn place(&mut self, sq: Square, piece: Piece) {
        if self.board.is_empty(sq) {
            let id = self.roster.add(piece, sq);
            self.board.set(sq, Some(Occupant { id, piece }));
        }
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        FenParser::format(|sq| self.board.piece_at(sq), self.side_to_move, 0, 1)
    }

    /// Returns the board grid.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the roster of on-board and captured pieces.
    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Returns the square of the given side's general, if it is on the board.
    #[inline]
    pub fn general_square(&self, side: Side) -> Option<Square> {
        self.roster.general(side)
    }

    /// Returns the captured pieces of a side, in capture order.
    pub fn captured(&self, side: Side) -> Vec<Piece> {
        self.roster
            .captured(side)
            .iter()
            .map(|&id| self.roster.record(id).piece)
            .collect()
    }

    /// Returns a read-only grid for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Moves the piece on `from` to `to`, capturing whatever stood on `to`.
    ///
    /// No rule is checked here. Returns `None` (and changes nothing) when
    /// `from` is empty or equals `to`.
    pub fn apply(&mut self, from: Square, to: Square) -> Option<Undo> {
        if from == to {
            return None;
        }
        let moved = self.board.get(from)?;

        let captured = self.board.set(to, Some(moved));
        self.board.set(from, None);
        self.roster.set_square(moved.id, to);
        if let Some(victim) = captured {
            self.roster.capture(victim.id);
        }

        Some(Undo {
            from,
            to,
            moved,
            captured,
        })
    }

    /// Restores the position to exactly what it was before the matching
    /// [`apply`](Self::apply).
    ///
    /// Undos must be rolled back in reverse order of application.
    pub fn rollback(&mut self, undo: Undo) {
        self.board.set(undo.from, Some(undo.moved));
        self.board.set(undo.to, undo.captured);
        self.roster.set_square(undo.moved.id, undo.from);
        if let Some(victim) = undo.captured {
            self.roster.restore(victim.id);
        }
    }

    /// Applies a move, evaluates `probe` on the resulting position, then rolls
    /// the move back.
    ///
    /// Returns `None` when the move could not be applied.
    pub fn trial<R, F>(&mut self, from: Square, to: Square, probe: F) -> Option<R>
    where
        F: FnOnce(&Position) -> R,
    {
        let undo = self.apply(from, to)?;
        let result = probe(self);
        self.rollback(undo);
        Some(result)
    }

    /// Returns true if board and roster agree with each other.
    ///
    /// The occupied cells must be exactly the on-board pieces of both sides,
    /// each at its recorded square, and no captured piece may be on the board.
    /// A general found by scanning the palace must be the one the roster
    /// knows about.
    pub fn is_consistent(&self) -> bool {
        let mut on_board = 0;
        for side in Side::ALL {
            for id in self.roster.on_board(side) {
                on_board += 1;
                let record = self.roster.record(id);
                if record.piece.side != side {
                    return false;
                }
                let expected = Occupant {
                    id,
                    piece: record.piece,
                };
                if self.board.get(record.square) != Some(expected) {
                    return false;
                }
            }
        }

        let occupied = self.board.occupants().count();
        let captured_clean = Side::ALL.iter().all(|&side| {
            self.roster
                .captured(side)
                .iter()
                .all(|&id| !self.board_holds(id))
        });

        let generals_agree = Side::ALL
            .iter()
            .all(|&side| self.board.find_general(side) == self.roster.general(side));

        occupied == on_board && captured_clean && generals_agree
    }

    fn board_holds(&self, id: PieceId) -> bool {
        self.board.occupants().any(|(_, occupant)| occupant.id == id)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::PieceKind;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn startpos_fen_roundtrip() {
        let pos = Position::startpos();
        assert_eq!(pos.to_fen(), FenParser::STARTPOS);
    }

    #[test]
    fn startpos_rosters() {
        let pos = Position::startpos();
        assert_eq!(pos.roster().len(), 32);
        assert_eq!(pos.roster().on_board(Side::Red).count(), 16);
        assert_eq!(pos.roster().on_board(Side::Black).count(), 16);
        assert_eq!(pos.general_square(Side::Red), Some(sq(1, 5)));
        assert_eq!(pos.general_square(Side::Black), Some(sq(10, 5)));
        assert!(pos.is_consistent());
    }

    #[test]
    fn piece_at() {
        let pos = Position::startpos();
        assert_eq!(
            pos.piece_at(sq(3, 2)),
            Some(Piece::new(PieceKind::Cannon, Side::Red))
        );
        assert_eq!(
            pos.piece_at(sq(7, 9)),
            Some(Piece::new(PieceKind::Soldier, Side::Black))
        );
        assert_eq!(pos.piece_at(sq(5, 5)), None);
    }

    #[test]
    fn apply_quiet_move() {
        let mut pos = Position::startpos();
        let undo = pos.apply(sq(3, 8), sq(3, 5)).unwrap();
        assert_eq!(undo.captured_piece(), None);
        assert_eq!(pos.piece_at(sq(3, 8)), None);
        assert_eq!(
            pos.piece_at(sq(3, 5)),
            Some(Piece::new(PieceKind::Cannon, Side::Red))
        );
        assert_eq!(pos.roster().record(undo.moved.id).square, sq(3, 5));
        assert!(pos.is_consistent());
    }

    #[test]
    fn apply_capture_updates_roster() {
        let mut pos = Position::startpos();
        let undo = pos.apply(sq(3, 8), sq(10, 8)).unwrap();
        assert_eq!(
            undo.captured_piece(),
            Some(Piece::new(PieceKind::Horse, Side::Black))
        );
        assert_eq!(pos.roster().on_board(Side::Black).count(), 15);
        assert_eq!(
            pos.captured(Side::Black),
            vec![Piece::new(PieceKind::Horse, Side::Black)]
        );
        assert!(pos.is_consistent());
    }

    #[test]
    fn rollback_restores_exactly() {
        let original = Position::startpos();
        let mut pos = original.clone();

        let undo = pos.apply(sq(3, 8), sq(10, 8)).unwrap();
        pos.rollback(undo);
        assert_eq!(pos, original);

        let undo = pos.apply(sq(1, 1), sq(2, 1)).unwrap();
        pos.rollback(undo);
        assert_eq!(pos, original);
    }

    #[test]
    fn nested_rollbacks_in_reverse_order() {
        let original = Position::startpos();
        let mut pos = original.clone();

        let first = pos.apply(sq(3, 2), sq(10, 2)).unwrap();
        let second = pos.apply(sq(10, 1), sq(10, 2)).unwrap();
        assert_eq!(pos.captured(Side::Red).len(), 1);
        assert_eq!(pos.captured(Side::Black).len(), 1);

        pos.rollback(second);
        pos.rollback(first);
        assert_eq!(pos, original);
    }

    #[test]
    fn apply_rejects_empty_origin_and_null_move() {
        let mut pos = Position::startpos();
        assert!(pos.apply(sq(5, 5), sq(6, 5)).is_none());
        assert!(pos.apply(sq(1, 5), sq(1, 5)).is_none());
        assert_eq!(pos, Position::startpos());
    }

    #[test]
    fn trial_leaves_position_untouched() {
        let original = Position::startpos();
        let mut pos = original.clone();
        let seen = pos.trial(sq(3, 8), sq(10, 8), |p| p.roster().on_board(Side::Black).count());
        assert_eq!(seen, Some(15));
        assert_eq!(pos, original);
    }

    #[test]
    fn from_fen_custom() {
        let pos = Position::from_fen("4k4/9/9/9/9/9/9/9/4R4/3K5 b").unwrap();
        assert_eq!(pos.side_to_move, Side::Black);
        assert_eq!(pos.general_square(Side::Red), Some(sq(1, 4)));
        assert_eq!(
            pos.piece_at(sq(2, 5)),
            Some(Piece::new(PieceKind::Chariot, Side::Red))
        );
        assert!(pos.is_consistent());
    }
}
