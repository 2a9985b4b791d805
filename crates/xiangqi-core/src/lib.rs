//! Core types for xiangqi.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`], [`PieceKind`] and [`Side`] for piece representation
//! - [`Square`] for board coordinates on the 10x9 grid
//! - [`Move`] for move representation
//! - FEN parsing for xiangqi positions

mod fen;
mod mov;
mod piece;
mod side;
mod square;

pub use fen::{FenError, FenParser};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::Square;
