//! Error types shared by the board model, move generation, and search.
//!
//! Invariant violations (a missing king, an attack tracker desync, a piece
//! dropped onto an occupied square) are reported through the same enum as
//! malformed input so they propagate with `?` and abort the operation.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceId, Square};

/// Represents all possible error types that can occur in the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The requested color has no king on the board.
    #[error("no {0:?} king on the board")]
    KingMissing(Color),

    /// A piece was expected in the attacker list of a square but was absent.
    #[error("attack tracker desync: piece {piece} not recorded as attacking square {square}")]
    AttackTrackerDesync { square: Square, piece: PieceId },

    /// A square index outside `0..=63`.
    #[error("square index {0} is off the board")]
    OutOfBounds(Square),

    /// Attempted to place a piece on a square that is already occupied.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// Attempted to move a piece from a square holding nothing.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// Castling was requested but the rook is not where it should be.
    #[error("castling rook missing on square {0}")]
    CastlingRookMissing(Square),

    /// `unmake_move` was called with an empty history.
    #[error("no move to unmake")]
    NothingToUnmake,

    /// The position description could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The provided algebraic notation is invalid or could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// The move text parsed but is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

/// Result alias used throughout the crate.
pub type ChessResult<T> = Result<T, ChessError>;
