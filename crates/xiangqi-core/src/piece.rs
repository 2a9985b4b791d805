//! Xiangqi piece representation.

use crate::Side;

/// The seven kinds of xiangqi pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    General = 0,
    Adviser = 1,
    Elephant = 2,
    Horse = 3,
    Chariot = 4,
    Cannon = 5,
    Soldier = 6,
}

impl PieceKind {
    /// Returns true if this kind can never leave its palace.
    #[inline]
    pub const fn is_palace_bound(self) -> bool {
        matches!(self, PieceKind::General | PieceKind::Adviser)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::General => "General",
            PieceKind::Adviser => "Adviser",
            PieceKind::Elephant => "Elephant",
            PieceKind::Horse => "Horse",
            PieceKind::Chariot => "Chariot",
            PieceKind::Cannon => "Cannon",
            PieceKind::Soldier => "Soldier",
        };
        write!(f, "{}", name)
    }
}

/// A piece kind together with the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    /// Returns the FEN character for this piece (upper case for Red).
    pub const fn to_fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::General => 'k',
            PieceKind::Adviser => 'a',
            PieceKind::Elephant => 'b',
            PieceKind::Horse => 'n',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        };
        match self.side {
            Side::Red => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Parses a FEN character into a piece.
    ///
    /// Both the `b`/`n` and the `e`/`h` spellings for elephant and horse are
    /// accepted.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::Red
        } else {
            Side::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::General,
            'a' => PieceKind::Adviser,
            'b' | 'e' => PieceKind::Elephant,
            'n' | 'h' => PieceKind::Horse,
            'r' => PieceKind::Chariot,
            'c' => PieceKind::Cannon,
            'p' => PieceKind::Soldier,
            _ => return None,
        };
        Some(Piece { kind, side })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}
