//! Random-move engine.
//!
//! Selects uniformly from legal moves. Useful as a sparring opponent and in
//! tests that only need some legal move.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Board;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: FastLegalMoveGenerator,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: FastLegalMoveGenerator,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Sentinel Random"
    }

    fn choose_move(&mut self, board: &mut Board) -> ChessResult<EngineOutput> {
        let side = board.side_to_move();
        let legal_moves = self.move_generator.generate_legal_moves(board, side)?;

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        let mut rng = rand::rng();
        out.best_move = legal_moves.as_slice().choose(&mut rng).copied();
        Ok(out)
    }
}
