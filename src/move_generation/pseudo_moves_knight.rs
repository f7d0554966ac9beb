//! Pseudo-legal knight moves.
//!
//! Each jump is a diagonal step followed by an orthogonal step that shares
//! one axis with it. The orthogonal axis needs two squares of room and the
//! other axis one, which rules out wraparound.

use crate::game_state::chess_types::*;
use crate::moves::edge_distances::{DIRECTION_OFFSETS, NUM_SQUARES_TO_EDGE};
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(board: &Board, piece: &Piece, allow_own_color: bool, out: &mut Vec<Move>) {
    let from = piece.square;
    let to_edge = &NUM_SQUARES_TO_EDGE[from as usize];

    for jump in 0..8usize {
        let half = jump / 2;
        let corner_offset = DIRECTION_OFFSETS[4 + half];

        let main_axis = (half + jump % 2) % 4;
        let minor_axis = (half + 1 - jump % 2) % 4;
        if to_edge[main_axis] < 2 || to_edge[minor_axis] == 0 {
            continue;
        }

        let target = (from as i8 + corner_offset + DIRECTION_OFFSETS[main_axis]) as Square;
        match board.piece_at(target) {
            Some(other) if other.color == piece.color && !allow_own_color => {}
            _ => out.push(Move::new(from, target)),
        }
    }
}
