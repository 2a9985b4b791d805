//! Xiangqi (Chinese chess) rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 10x9 grid of piece references
//! - [`Roster`] - on-board and captured pieces per side
//! - [`Position`] - board, roster and side to move, with exact apply/rollback
//! - [`rules`] - per-piece movement predicates
//! - [`movegen`] - attack sets, legal move generation and perft
//! - [`resolver`] - check, checkmate and stalemate detection
//! - [`Game`] - turn order, check flags and the terminal state
//!
//! # Architecture
//!
//! Piece legality is a pure function of board occupancy. Whether a move
//! leaves the mover's general exposed is decided by applying it to the
//! position, inspecting the result and rolling it back. The same trial
//! machinery drives the mate search, so apply and rollback must be exact
//! inverses.
//!
//! # Example
//!
//! ```
//! use xiangqi_engine::{Game, GameState, MoveOutcome};
//! use xiangqi_core::{Side, Square};
//!
//! let mut game = Game::new();
//! let from = Square::new(3, 8).unwrap();
//! let to = Square::new(3, 5).unwrap();
//! assert_eq!(game.try_make_move(from, to), Ok(MoveOutcome::Quiet));
//! assert_eq!(game.turn(), Side::Black);
//! assert_eq!(game.game_state(), GameState::Ongoing);
//! ```

mod board;
mod config;
mod game;
pub mod movegen;
mod position;
pub mod resolver;
mod roster;
pub mod rules;
mod square_set;

pub use board::{Board, Occupant, PieceId, Snapshot};
pub use config::{ConfigError, GameConfig, StalemateRule};
pub use game::{Game, GameMove, MoveError};
pub use movegen::{attacked_squares, generate_moves, is_square_attacked, perft, MoveList};
pub use position::{Position, Undo};
pub use resolver::MoveOutcome;
pub use roster::{PieceRecord, Roster};
pub use rules::GameState;
pub use square_set::SquareSet;
