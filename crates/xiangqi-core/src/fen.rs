//! FEN parsing and serialization for xiangqi positions.
//!
//! The placement field lists ten rows separated by `/`, starting with row 10
//! (Black's back rank) and ending with row 1. Digits are runs of empty cells.

use crate::{Piece, PieceKind, Side, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 2 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid side to move: expected 'w', 'r' or 'b', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Parsed FEN data.
///
/// Holds the validated placement and side to move. The engine turns the
/// placements into its own board and roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Every occupied square, in row-major order from row 10 down to row 1.
    pub placements: Vec<(Square, Piece)>,
    /// Side to move.
    pub side_to_move: Side,
    /// Halfmove clock. Carried for round-tripping only.
    pub halfmove_clock: u32,
    /// Fullmove number. Carried for round-tripping only.
    pub fullmove_number: u32,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str =
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 2 && parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placements = Self::parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" | "r" => Side::Red,
            "b" => Side::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let (halfmove_clock, fullmove_number) = if parts.len() == 6 {
            let halfmove = parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            let fullmove = parts[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
            (halfmove, fullmove)
        } else {
            (0, 1)
        };

        Ok(FenParser {
            placements,
            side_to_move,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_placement(placement: &str) -> Result<Vec<(Square, Piece)>, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != Square::ROWS as usize {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 10 rows, got {}",
                rows.len()
            )));
        }

        let mut placements = Vec::new();
        let mut generals = [0usize; 2];

        for (i, text) in rows.iter().enumerate() {
            let row = Square::ROWS - i as u8;
            let mut col = 0u8;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10) {
                    col = col.saturating_add(run as u8);
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    col = col.saturating_add(1);
                    let sq = Square::new(row, col).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!("row {} is too wide", row))
                    })?;
                    if piece.kind == PieceKind::General {
                        generals[piece.side.index()] += 1;
                    }
                    placements.push((sq, piece));
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in row {}",
                        c, row
                    )));
                }
            }
            if col != Square::COLS {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "row {} has {} squares, expected 9",
                    row, col
                )));
            }
        }

        for side in Side::ALL {
            if generals[side.index()] != 1 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "{} must have exactly one general, found {}",
                    side,
                    generals[side.index()]
                )));
            }
        }

        Ok(placements)
    }

    /// Builds a FEN string from a board lookup, the side to move and the clocks.
    pub fn format<F>(piece_at: F, side_to_move: Side, halfmove: u32, fullmove: u32) -> String
    where
        F: Fn(Square) -> Option<Piece>,
    {
        let mut fen = String::new();

        for row in (1..=Square::ROWS).rev() {
            let mut empty = 0;
            for col in 1..=Square::COLS {
                let piece = Square::new(row, col).and_then(&piece_at);
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row > 1 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match side_to_move {
            Side::Red => 'w',
            Side::Black => 'b',
        });
        fen.push_str(&format!(" - - {} {}", halfmove, fullmove));
        fen
    }

    /// Converts the parsed FEN back to a FEN string.
    pub fn to_fen(&self) -> String {
        Self::format(
            |sq| {
                self.placements
                    .iter()
                    .find(|(placed, _)| *placed == sq)
                    .map(|(_, piece)| *piece)
            },
            self.side_to_move,
            self.halfmove_clock,
            self.fullmove_number,
        )
    }
}
