//! Engine abstraction layer used by the interactive game.
//!
//! Different move-choosing strategies are selected at runtime behind a
//! single trait interface.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Board;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks a move for the side to move. The board is used as scratch
    /// space and is returned in the position it was given.
    fn choose_move(&mut self, board: &mut Board) -> ChessResult<EngineOutput>;
}
