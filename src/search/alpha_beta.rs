//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The board is searched in place: every node makes a move, recurses, and
//! unmakes it before looking at the result, so errors raised below a node
//! still leave the caller's board intact.

use log::{debug, trace};

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};
use crate::search::move_ordering::order_moves;

/// Bound wider than any mate score.
pub(crate) const INFINITY: i32 = MATE_SCORE + 1;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub order_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            order_moves: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub cutoffs: u64,
}

struct SearchContext<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    order_moves: bool,
    nodes: u64,
    cutoffs: u64,
}

pub fn alpha_beta_search<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    let side = board.side_to_move();
    if config.max_depth == 0 {
        return Ok(SearchResult {
            best_move: None,
            best_score: scorer.score(board, side),
            depth: 0,
            nodes: 1,
            cutoffs: 0,
        });
    }

    let mut ctx = SearchContext {
        generator,
        scorer,
        order_moves: config.order_moves,
        nodes: 1,
        cutoffs: 0,
    };

    let mut moves = generator.generate_legal_moves(board, side)?;
    if moves.is_empty() {
        let best_score = terminal_score(board, 0)?;
        return Ok(SearchResult {
            best_move: None,
            best_score,
            depth: config.max_depth,
            nodes: 1,
            cutoffs: 0,
        });
    }
    if ctx.order_moves {
        order_moves(board, &mut moves);
    }

    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best_move = None;

    for mv in moves {
        board.make_move(mv)?;
        let searched = negamax(board, &mut ctx, config.max_depth - 1, -beta, -alpha, 1);
        board.unmake_move()?;
        let score = -searched?;

        if score > alpha {
            alpha = score;
            best_move = Some(mv);
        }
    }

    debug!(
        "alpha-beta depth {} best {:?} score {} nodes {} cutoffs {}",
        config.max_depth, best_move, alpha, ctx.nodes, ctx.cutoffs
    );

    Ok(SearchResult {
        best_move,
        best_score: alpha,
        depth: config.max_depth,
        nodes: ctx.nodes,
        cutoffs: ctx.cutoffs,
    })
}

fn negamax<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    ctx: &mut SearchContext<'_, G, S>,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
) -> ChessResult<i32> {
    ctx.nodes += 1;

    let side = board.side_to_move();
    if depth == 0 {
        return Ok(ctx.scorer.score(board, side));
    }

    let mut moves = ctx.generator.generate_legal_moves(board, side)?;
    if moves.is_empty() {
        return terminal_score(board, ply);
    }
    if ctx.order_moves {
        order_moves(board, &mut moves);
    }

    for mv in moves {
        board.make_move(mv)?;
        let searched = negamax(board, ctx, depth - 1, -beta, -alpha, ply.saturating_add(1));
        board.unmake_move()?;
        let score = -searched?;

        if score >= beta {
            ctx.cutoffs += 1;
            trace!("beta cutoff at ply {ply} on {mv:?}");
            return Ok(beta);
        }
        if score > alpha {
            alpha = score;
        }
    }

    Ok(alpha)
}

/// Score for a side with no legal moves: mated, or a stalemate draw.
/// Nearer mates score further from zero.
pub(crate) fn terminal_score(board: &Board, ply: u8) -> ChessResult<i32> {
    if board.is_in_check(board.side_to_move())? {
        Ok(-MATE_SCORE + i32::from(ply))
    } else {
        Ok(0)
    }
}
