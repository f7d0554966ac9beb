//! Move generator seam.
//!
//! `generate_piece_moves` dispatches to the per-kind pseudo-legal generators;
//! `MoveGenerator` implementations turn the pseudo-legal list into legal moves.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliding::generate_sliding_moves;
use crate::moves::move_descriptions::Move;

pub trait MoveGenerator: Send + Sync {
    /// Legal moves for `color`, in pseudo-legal generation order.
    ///
    /// The board is mutated while candidates are tried and is restored before
    /// returning.
    fn generate_legal_moves(&self, board: &mut Board, color: Color) -> ChessResult<Vec<Move>>;
}

/// Appends the pseudo-legal moves of one piece.
///
/// With `allow_own_color` the output is attack coverage instead: squares
/// held by friendly pieces are included, pawn pushes and castling are left
/// out, and each promotion square appears once.
pub fn generate_piece_moves(board: &Board, id: PieceId, allow_own_color: bool, out: &mut Vec<Move>) {
    let piece = board.piece(id);
    match piece.kind {
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_sliding_moves(board, piece, allow_own_color, out)
        }
        PieceKind::Knight => generate_knight_moves(board, piece, allow_own_color, out),
        PieceKind::King => generate_king_moves(board, piece, allow_own_color, out),
        PieceKind::Pawn => generate_pawn_moves(board, piece, allow_own_color, out),
    }
}

/// All pseudo-legal moves for `color`, scanning the squares in index order.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for square in 0..64u8 {
        let Some(id) = board.piece_id_at(square) else {
            continue;
        };
        if board.piece(id).color == color {
            generate_piece_moves(board, id, false, &mut out);
        }
    }
    out
}
