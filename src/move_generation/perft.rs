//! Perft node counting over make/unmake.
//!
//! Used to validate move generation against known node counts and as a
//! benchmark workload.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf counts `depth` plies below the position, for the side to move.
pub fn perft<G: MoveGenerator>(generator: &G, board: &mut Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    let side = board.side_to_move();
    for mv in generator.generate_legal_moves(board, side)? {
        let is_capture = board.piece_id_at(mv.target).is_some();
        board.make_move(mv)?;
        let result = if depth == 1 {
            leaf_counts(generator, board, mv, is_capture)
        } else {
            perft(generator, board, depth - 1)
        };
        board.unmake_move()?;
        total.merge(result?);
    }

    Ok(total)
}

/// Per-root-move node counts, sorted in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &mut Board,
    depth: u8,
) -> ChessResult<Vec<(Move, usize)>> {
    let side = board.side_to_move();
    let mut out = Vec::new();
    for mv in generator.generate_legal_moves(board, side)? {
        board.make_move(mv)?;
        let result = perft(generator, board, depth.saturating_sub(1));
        board.unmake_move()?;
        out.push((mv, result?.nodes));
    }
    Ok(out)
}

fn leaf_counts<G: MoveGenerator>(
    generator: &G,
    board: &mut Board,
    mv: Move,
    is_capture: bool,
) -> ChessResult<PerftCounts> {
    let defender = board.side_to_move();
    let gives_check = board.is_in_check(defender)?;
    let is_checkmate = gives_check && generator.generate_legal_moves(board, defender)?.is_empty();

    Ok(PerftCounts {
        nodes: 1,
        captures: usize::from(is_capture),
        castles: usize::from(mv.is_castling()),
        promotions: usize::from(mv.is_promotion()),
        checks: usize::from(gives_check),
        checkmates: usize::from(is_checkmate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::{FastLegalMoveGenerator, LegalMoveGenerator};

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut board = Board::starting_position();
        let counts = perft(&FastLegalMoveGenerator, &mut board, 0).expect("perft should run");
        assert_eq!(counts.nodes, 1);
    }

    #[test]
    fn starting_position_node_counts() {
        let mut board = Board::starting_position();
        let reference = board.clone();
        let expected = [20usize, 400, 8902];
        for (depth, nodes) in expected.iter().enumerate() {
            let counts = perft(&FastLegalMoveGenerator, &mut board, depth as u8 + 1)
                .expect("perft should run");
            assert_eq!(counts.nodes, *nodes, "depth {}", depth + 1);
        }
        assert!(board == reference);
    }

    #[test]
    fn depth_three_leaf_statistics() {
        let mut board = Board::starting_position();
        let counts = perft(&FastLegalMoveGenerator, &mut board, 3).expect("perft should run");
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
        assert_eq!(counts.castles, 0);
    }

    #[test]
    fn reply_scan_generator_agrees_at_depth_two() {
        let mut board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let fast = perft(&FastLegalMoveGenerator, &mut board, 2).expect("perft should run");
        let slow = perft(&LegalMoveGenerator, &mut board, 2).expect("perft should run");
        assert_eq!(fast, slow);

        let root = perft(&FastLegalMoveGenerator, &mut board, 1).expect("perft should run");
        assert_eq!(root.nodes, 48);
        assert_eq!(root.captures, 8);
        assert_eq!(root.castles, 2);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::starting_position();
        let divided = perft_divide(&FastLegalMoveGenerator, &mut board, 2).expect("divide should run");
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }
}
