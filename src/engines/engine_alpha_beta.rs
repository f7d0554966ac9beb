use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Board;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::search::alpha_beta::{alpha_beta_search, SearchConfig};
use crate::search::board_scoring::PieceSquareScorer;

pub struct AlphaBetaEngine {
    config: SearchConfig,
    move_generator: FastLegalMoveGenerator,
    scorer: PieceSquareScorer,
}

impl AlphaBetaEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            move_generator: FastLegalMoveGenerator,
            scorer: PieceSquareScorer,
        }
    }

    pub fn with_depth(max_depth: u8) -> Self {
        Self::new(SearchConfig {
            max_depth: max_depth.max(1),
            ..SearchConfig::default()
        })
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Sentinel Alpha-Beta"
    }

    fn choose_move(&mut self, board: &mut Board) -> ChessResult<EngineOutput> {
        let result = alpha_beta_search(board, &self.move_generator, &self.scorer, self.config)?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "depth {} score cp {} nodes {} cutoffs {}",
            result.depth, result.best_score, result.nodes, result.cutoffs
        ));

        Ok(out)
    }
}
