//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Text is matched against the legal moves of the side to move, so castling
//! is written as the king's two-square step (`e1g1`). A missing promotion
//! suffix selects a queen.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Splits move text into start, target, and optional promotion piece.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let target = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(|| ChessError::InvalidAlgebraic(text.to_owned()))?),
        None => None,
    };

    Ok((start, target, promotion))
}

/// Finds the legal move the text names for the side to move.
pub fn resolve_long_algebraic(board: &mut Board, text: &str) -> ChessResult<Move> {
    let (start, target, promotion) = parse_long_algebraic(text)?;
    let side = board.side_to_move();
    let legal = board.legal_moves(side)?;

    let candidate = legal
        .iter()
        .copied()
        .find(|mv| mv.start == start && mv.target == target)
        .ok_or_else(|| ChessError::IllegalMove(text.trim().to_owned()))?;

    if !candidate.is_promotion() {
        if promotion.is_some() {
            return Err(ChessError::IllegalMove(text.trim().to_owned()));
        }
        return Ok(candidate);
    }

    let chosen = candidate.with_promotion(promotion.unwrap_or(PieceKind::Queen));
    if legal.contains(&chosen) {
        Ok(chosen)
    } else {
        Err(ChessError::IllegalMove(text.trim().to_owned()))
    }
}

/// Resolves the text and plays it on the board.
pub fn apply_long_algebraic(board: &mut Board, text: &str) -> ChessResult<Move> {
    let mv = resolve_long_algebraic(board, text)?;
    board.make_move(mv)?;
    Ok(mv)
}

pub fn move_to_long_algebraic(mv: Move) -> ChessResult<String> {
    let mut out = square_to_algebraic(mv.start)?;
    out.push_str(&square_to_algebraic(mv.target)?);
    if let Some(kind) = mv.promotion_kind() {
        out.push(promotion_to_char(kind));
    }
    Ok(out)
}

fn promotion_to_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
