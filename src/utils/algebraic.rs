//! Square conversions for algebraic coordinates.
//!
//! Index 0 is a8 and 63 is h1, so rank 8 sits on row 0.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{square_col, square_row, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok(row * 8 + col)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::OutOfBounds(square));
    }

    let file_char = char::from(b'a' + square_col(square));
    let rank_char = char::from(b'8' - square_row(square));

    Ok(format!("{file_char}{rank_char}"))
}
