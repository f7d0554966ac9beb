//! Legality filters.
//!
//! Both generators try each pseudo-legal move on the board, reject it when
//! the mover's king is left capturable, and unmake it before moving on.
//! `LegalMoveGenerator` answers king safety by enumerating the opponent's
//! replies; `FastLegalMoveGenerator` asks the attack tracker instead.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenerator};
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &mut Board, color: Color) -> ChessResult<Vec<Move>> {
        filter_legal(board, color, |board, color| {
            let king = scan_for_king(board, color)?;
            Ok(pseudo_legal_moves(board, color.opposite())
                .iter()
                .any(|reply| reply.target == king))
        })
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, board: &mut Board, color: Color) -> ChessResult<Vec<Move>> {
        filter_legal(board, color, |board, color| board.is_in_check(color))
    }
}

fn filter_legal<F>(board: &mut Board, color: Color, king_exposed: F) -> ChessResult<Vec<Move>>
where
    F: Fn(&Board, Color) -> ChessResult<bool>,
{
    // `make_move` only accepts the side to move, so hand the turn to `color`
    // while its moves are tried and give it back on every exit path.
    let side_to_move = board.side_to_move;
    board.side_to_move = color;
    let result = try_each_move(board, color, king_exposed);
    board.side_to_move = side_to_move;
    result
}

fn try_each_move<F>(board: &mut Board, color: Color, king_exposed: F) -> ChessResult<Vec<Move>>
where
    F: Fn(&Board, Color) -> ChessResult<bool>,
{
    let pseudo = pseudo_legal_moves(board, color);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        board.make_move(mv)?;
        let exposed = king_exposed(board, color);
        board.unmake_move()?;

        if !exposed? {
            legal.push(mv);
        }
    }

    Ok(legal)
}

/// Finds the king of `color` by scanning all 64 squares.
fn scan_for_king(board: &Board, color: Color) -> ChessResult<Square> {
    (0..64u8)
        .find(|&sq| {
            board
                .piece_at(sq)
                .is_some_and(|p| p.kind == PieceKind::King && p.color == color)
        })
        .ok_or(ChessError::KingMissing(color))
}
