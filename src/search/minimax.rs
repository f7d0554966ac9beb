//! Plain negamax without pruning.
//!
//! Visits every node to the requested depth. Used as the reference value
//! that alpha-beta must reproduce.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::alpha_beta::{terminal_score, SearchResult, INFINITY};
use crate::search::board_scoring::BoardScorer;

pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    generator: &G,
    scorer: &S,
    depth: u8,
) -> ChessResult<SearchResult> {
    let mut nodes = 0u64;
    let side = board.side_to_move();
    let mut result = SearchResult {
        depth,
        ..SearchResult::default()
    };

    if depth == 0 {
        result.best_score = scorer.score(board, side);
        result.nodes = 1;
        return Ok(result);
    }

    nodes += 1;
    let moves = generator.generate_legal_moves(board, side)?;
    if moves.is_empty() {
        result.best_score = terminal_score(board, 0)?;
        result.nodes = nodes;
        return Ok(result);
    }

    let mut best_score = -INFINITY;
    for mv in moves {
        board.make_move(mv)?;
        let searched = negamax(board, generator, scorer, depth - 1, 1, &mut nodes);
        board.unmake_move()?;
        let score = -searched?;

        if score > best_score {
            best_score = score;
            result.best_move = Some(mv);
        }
    }

    result.best_score = best_score;
    result.nodes = nodes;
    Ok(result)
}

fn negamax<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    generator: &G,
    scorer: &S,
    depth: u8,
    ply: u8,
    nodes: &mut u64,
) -> ChessResult<i32> {
    *nodes += 1;

    let side = board.side_to_move();
    if depth == 0 {
        return Ok(scorer.score(board, side));
    }

    let moves = generator.generate_legal_moves(board, side)?;
    if moves.is_empty() {
        return terminal_score(board, ply);
    }

    let mut best = -INFINITY;
    for mv in moves {
        board.make_move(mv)?;
        let searched = negamax(board, generator, scorer, depth - 1, ply.saturating_add(1), nodes);
        board.unmake_move()?;
        best = best.max(-searched?);
    }

    Ok(best)
}
