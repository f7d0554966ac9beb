//! Pseudo-legal rook, bishop, and queen moves.
//!
//! Walks each direction until the edge, a friendly blocker (excluded unless
//! computing coverage), or an enemy piece (included).

use crate::game_state::chess_types::*;
use crate::moves::edge_distances::{step, NUM_SQUARES_TO_EDGE};
use crate::moves::move_descriptions::Move;

pub fn generate_sliding_moves(board: &Board, piece: &Piece, allow_own_color: bool, out: &mut Vec<Move>) {
    let directions = match piece.kind {
        PieceKind::Bishop => 4..8,
        PieceKind::Rook => 0..4,
        _ => 0..8,
    };

    let from = piece.square;
    for direction in directions {
        for distance in 1..=NUM_SQUARES_TO_EDGE[from as usize][direction] {
            let target = step(from, direction, distance);

            match board.piece_at(target) {
                Some(blocker) if blocker.color == piece.color => {
                    if allow_own_color {
                        out.push(Move::new(from, target));
                    }
                    break;
                }
                Some(_) => {
                    out.push(Move::new(from, target));
                    break;
                }
                None => out.push(Move::new(from, target)),
            }
        }
    }
}
