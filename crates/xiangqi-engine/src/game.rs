//! Full game management: turn order, check flags and the terminal state.
//!
//! [`Game`] owns the position exclusively. Every move request runs to
//! completion, including the trial moves of the mate search, before it
//! returns, so callers never observe a half-applied move.

use thiserror::Error;
use xiangqi_core::{FenError, Move, Piece, Side, Square};

use crate::board::Snapshot;
use crate::config::{ConfigError, GameConfig, StalemateRule};
use crate::movegen::generate_moves;
use crate::resolver::{self, MoveOutcome};
use crate::rules::{self, GameState};
use crate::{MoveList, Position};

/// A committed move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The move itself.
    pub mov: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece captured by the move, if any.
    pub captured: Option<Piece>,
    /// What the move did to the opponent.
    pub outcome: MoveOutcome,
}

/// Why a move request was rejected.
///
/// Every rejection leaves the game exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    #[error("piece on {square} belongs to {owner}, but {to_move} is to move")]
    WrongSide {
        square: Square,
        owner: Side,
        to_move: Side,
    },

    #[error("{0} holds a piece of the side to move")]
    FriendlyFire(Square),

    #[error("{piece} cannot move from {from} to {to}")]
    IllegalPieceMove { piece: Piece, from: Square, to: Square },

    #[error("moving {from} to {to} would expose the {side} general")]
    SelfExposure { side: Side, from: Square, to: Square },

    #[error("game is over: {0}")]
    GameOver(GameState),
}

/// A complete xiangqi game.
///
/// Unlike [`Position`], which only knows where the pieces are, `Game`
/// enforces whose turn it is, keeps both check flags current and records
/// the winner once the game ends. A finished game rejects every further
/// move.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Starting position.
    start_pos: Position,
    /// Terminal status; never reverts once a winner is set.
    state: GameState,
    /// Check flag per side, indexed by [`Side::index`].
    in_check: [bool; 2],
    /// Committed moves.
    moves: Vec<GameMove>,
    /// Ruling applied when the side to move is stalemated.
    stalemate: StalemateRule,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Creates a game from a custom starting position.
    ///
    /// Both check flags are evaluated immediately and the side to move is
    /// classified, so a position that is already mate starts finished.
    pub fn from_position(position: Position) -> Self {
        Self::build(position, StalemateRule::default())
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let position = Position::from_fen(fen)?;
        Ok(Self::from_position(position))
    }

    /// Creates a game from a loaded configuration.
    pub fn with_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let position = config.start_position()?;
        Ok(Self::build(position, config.stalemate))
    }

    fn build(position: Position, stalemate: StalemateRule) -> Self {
        let mut game = Game {
            start_pos: position.clone(),
            position,
            state: GameState::Ongoing,
            in_check: [false; 2],
            moves: Vec::new(),
            stalemate,
        };
        for side in Side::ALL {
            game.in_check[side.index()] = resolver::is_in_check(&game.position, side);
        }
        let to_move = game.position.side_to_move;
        let outcome = resolver::classify(&mut game.position, to_move);
        game.settle(to_move.opposite(), outcome);
        game
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        &self.start_pos
    }

    /// Returns the terminal status.
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Side {
        self.position.side_to_move
    }

    /// Returns the check flag of `side`.
    pub fn is_in_check(&self, side: Side) -> bool {
        self.in_check[side.index()]
    }

    /// Returns the stalemate ruling in force.
    pub fn stalemate_rule(&self) -> StalemateRule {
        self.stalemate
    }

    /// Returns a read-only grid of the board for rendering.
    pub fn board_snapshot(&self) -> Snapshot {
        self.position.snapshot()
    }

    /// Returns all legal moves of the side to move.
    ///
    /// Empty once the game is over.
    pub fn legal_moves(&self) -> MoveList {
        if self.state.is_over() {
            return MoveList::new();
        }
        let mut scratch = self.position.clone();
        generate_moves(&mut scratch, self.position.side_to_move)
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the pieces `side` has lost, in capture order.
    pub fn captured(&self, side: Side) -> Vec<Piece> {
        self.position.captured(side)
    }

    /// Returns the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Attempts a move and reports whether it was accepted.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        self.try_make_move(from, to).is_ok()
    }

    /// Attempts a move given as raw 1-based `(row, column)` pairs.
    ///
    /// Out-of-range coordinates are rejected without touching the board.
    pub fn make_move_coords(&mut self, from: (i32, i32), to: (i32, i32)) -> bool {
        self.try_make_move_coords(from, to).is_ok()
    }

    /// Like [`make_move_coords`](Self::make_move_coords), reporting why a
    /// move was rejected.
    pub fn try_make_move_coords(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<MoveOutcome, MoveError> {
        let to_square = |(row, col): (i32, i32)| {
            Square::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })
        };
        let from = to_square(from);
        let to = to_square(to);
        match (from, to) {
            (Ok(from), Ok(to)) => self.try_make_move(from, to),
            (Err(err), _) | (_, Err(err)) => {
                tracing::debug!(reason = %err, "move rejected");
                Err(err)
            }
        }
    }

    /// Attempts a move, reporting why it was rejected.
    ///
    /// On success the turn passes to the opponent, both check flags are
    /// updated and the opponent's replies are searched to detect mate or
    /// stalemate.
    pub fn try_make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        match self.commit(from, to) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                tracing::debug!(%from, %to, reason = %err, "move rejected");
                Err(err)
            }
        }
    }

    fn commit(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver(self.state));
        }

        let mover = self.position.side_to_move;
        let piece = self
            .position
            .piece_at(from)
            .ok_or(MoveError::EmptyOrigin(from))?;
        if piece.side != mover {
            return Err(MoveError::WrongSide {
                square: from,
                owner: piece.side,
                to_move: mover,
            });
        }
        if self.position.board().side_at(to) == Some(mover) {
            return Err(MoveError::FriendlyFire(to));
        }
        if !rules::is_legal(self.position.board(), from, to) {
            return Err(MoveError::IllegalPieceMove { piece, from, to });
        }

        let undo = self
            .position
            .apply(from, to)
            .ok_or(MoveError::EmptyOrigin(from))?;
        if resolver::is_self_exposed(&self.position, mover) {
            self.position.rollback(undo);
            return Err(MoveError::SelfExposure {
                side: mover,
                from,
                to,
            });
        }

        let opponent = mover.opposite();
        self.position.side_to_move = opponent;
        self.in_check[mover.index()] = false;
        self.in_check[opponent.index()] = resolver::is_in_check(&self.position, opponent);

        let outcome = resolver::classify(&mut self.position, opponent);
        self.moves.push(GameMove {
            mov: Move::new(from, to),
            piece,
            captured: undo.captured_piece(),
            outcome,
        });
        self.settle(mover, outcome);
        Ok(outcome)
    }

    /// Records the result of classifying the side that is now to move.
    /// `last_mover` is the side that would win.
    fn settle(&mut self, last_mover: Side, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Checkmate => {
                tracing::info!(winner = %last_mover, "checkmate");
                self.state = GameState::won_by(last_mover);
            }
            MoveOutcome::Stalemate => {
                tracing::info!(
                    stalemated = %last_mover.opposite(),
                    rule = ?self.stalemate,
                    "stalemate"
                );
                if self.stalemate == StalemateRule::StalematedSideLoses {
                    self.state = GameState::won_by(last_mover);
                }
            }
            MoveOutcome::Quiet | MoveOutcome::Check => {}
        }
    }
}
