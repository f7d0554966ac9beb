//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::chess_types::*;
use crate::search::piece_square_tables::piece_square_value;

pub const MATE_SCORE: i32 = 30000;

pub trait BoardScorer: Send + Sync {
    /// Score in centipawns, positive when `perspective` is better off.
    fn score(&self, board: &Board, perspective: Color) -> i32;
}

/// Centipawn material value. Kings carry no material.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[inline]
fn from_perspective(white_minus_black: i32, perspective: Color) -> i32 {
    match perspective {
        Color::White => white_minus_black,
        Color::Black => -white_minus_black,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    fn material(board: &Board, color: Color) -> i32 {
        ALL_PIECE_KINDS
            .iter()
            .map(|&kind| board.pieces_of(color, kind).len() as i32 * piece_value(kind))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        let white_minus_black =
            Self::material(board, Color::White) - Self::material(board, Color::Black);
        from_perspective(white_minus_black, perspective)
    }
}

/// Material plus the per-kind piece-square bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    fn color_score(board: &Board, color: Color) -> i32 {
        board
            .active_pieces(color)
            .map(|id| {
                let piece = board.piece(id);
                piece_value(piece.kind) + piece_square_value(piece.kind, color, piece.square)
            })
            .sum()
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        let white_minus_black =
            Self::color_score(board, Color::White) - Self::color_score(board, Color::Black);
        from_perspective(white_minus_black, perspective)
    }
}
