//! Canonical chess-rule constants.
//!
//! Starting layout, home squares used by castling, and the castling policy
//! switch.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const WHITE_KING_HOME: Square = 60;
pub const BLACK_KING_HOME: Square = 4;

pub const WHITE_KINGSIDE_ROOK_HOME: Square = 63;
pub const WHITE_QUEENSIDE_ROOK_HOME: Square = 56;
pub const BLACK_KINGSIDE_ROOK_HOME: Square = 7;
pub const BLACK_QUEENSIDE_ROOK_HOME: Square = 0;

/// Whether castling also requires the king's path to be free of attacks.
///
/// `Relaxed` only checks rights, rook presence, and empty squares between
/// king and rook. `Strict` also forbids castling out of, through, or into
/// an attacked square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CastlingRule {
    #[default]
    Relaxed,
    Strict,
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    }
}

#[inline]
pub const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE,
    }
}

#[inline]
pub const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_QUEENSIDE,
    }
}

/// Rights lost when a piece leaves or is captured on `square`.
#[inline]
pub const fn rights_cleared_by_square(square: Square) -> CastlingRights {
    match square {
        WHITE_KING_HOME => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        BLACK_KING_HOME => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        WHITE_KINGSIDE_ROOK_HOME => CASTLE_WHITE_KINGSIDE,
        WHITE_QUEENSIDE_ROOK_HOME => CASTLE_WHITE_QUEENSIDE,
        BLACK_KINGSIDE_ROOK_HOME => CASTLE_BLACK_KINGSIDE,
        BLACK_QUEENSIDE_ROOK_HOME => CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}

/// Rook start and destination squares for a castling king move.
#[inline]
pub const fn castling_rook_squares(king_from: Square, king_to: Square) -> (Square, Square) {
    if king_to % 8 == 6 {
        (king_from + 3, king_to - 1)
    } else {
        (king_from - 4, king_to + 1)
    }
}
