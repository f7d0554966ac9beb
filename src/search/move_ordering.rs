use std::cmp::Reverse;

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::piece_value;

const CAPTURED_PIECE_MULTIPLIER: i32 = 10;

/// Heuristic used to try promising moves first.
///
/// Captures score `10 * victim - mover`, so even a losing capture ranks
/// above a quiet move. Promotions add the promoted piece's value.
pub fn move_order_score(board: &Board, mv: Move) -> i32 {
    let mut score = 0;

    if let (Some(mover), Some(victim)) = (board.piece_at(mv.start), board.piece_at(mv.target)) {
        score = piece_value(victim.kind) * CAPTURED_PIECE_MULTIPLIER - piece_value(mover.kind);
    }

    if let Some(kind) = mv.promotion_kind() {
        score += piece_value(kind);
    }

    score
}

/// Stable sort, best first. The set of moves is unchanged.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|&mv| Reverse(move_order_score(board, mv)));
}
