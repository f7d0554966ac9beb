//! Pseudo-legal king moves, including castling.
//!
//! Castling requires the rights bit, an own rook on its corner, and empty
//! squares between king and rook. Under `CastlingRule::Strict` the king also
//! may not start on, pass through, or land on an attacked square.

use crate::game_state::chess_rules::{king_home, kingside_right, queenside_right, CastlingRule};
use crate::game_state::chess_types::*;
use crate::moves::edge_distances::{step, NUM_SQUARES_TO_EDGE};
use crate::moves::move_descriptions::{Move, MoveFlag};

pub fn generate_king_moves(board: &Board, piece: &Piece, allow_own_color: bool, out: &mut Vec<Move>) {
    let from = piece.square;
    for direction in 0..8 {
        if NUM_SQUARES_TO_EDGE[from as usize][direction] == 0 {
            continue;
        }

        let target = step(from, direction, 1);
        match board.piece_at(target) {
            Some(other) if other.color == piece.color && !allow_own_color => {}
            _ => out.push(Move::new(from, target)),
        }
    }

    if !allow_own_color {
        generate_castling_moves(board, piece, out);
    }
}

fn generate_castling_moves(board: &Board, king: &Piece, out: &mut Vec<Move>) {
    let color = king.color;
    if king.square != king_home(color) {
        return;
    }

    let enemy = color.opposite();
    let strict = board.castling_rule() == CastlingRule::Strict;
    if strict && board.is_square_attacked(king.square, enemy) {
        return;
    }

    let sides = [
        (kingside_right(color), 3i8, 2i8),
        (queenside_right(color), -4i8, -2i8),
    ];

    for (right, rook_offset, king_offset) in sides {
        if board.castling_rights() & right == 0 {
            continue;
        }

        let rook_square = (king.square as i8 + rook_offset) as Square;
        match board.piece_at(rook_square) {
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == color => {}
            _ => continue,
        }

        let direction = rook_offset.signum();
        let path_clear = (1..rook_offset.abs())
            .all(|i| board.piece_at((king.square as i8 + direction * i) as Square).is_none());
        if !path_clear {
            continue;
        }

        let target = (king.square as i8 + king_offset) as Square;
        if strict {
            let transit = (king.square as i8 + direction) as Square;
            if board.is_square_attacked(transit, enemy) || board.is_square_attacked(target, enemy) {
                continue;
            }
        }

        out.push(Move::with_flag(king.square, target, MoveFlag::Castling));
    }
}
