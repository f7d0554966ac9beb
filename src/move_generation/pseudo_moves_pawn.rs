use crate::game_state::chess_types::*;
use crate::moves::edge_distances::{
    step, NORTH, NORTH_EAST, NORTH_WEST, NUM_SQUARES_TO_EDGE, SOUTH, SOUTH_EAST, SOUTH_WEST,
};
use crate::moves::move_descriptions::{Move, PROMOTION_FLAGS};

pub fn generate_pawn_moves(board: &Board, piece: &Piece, allow_own_color: bool, out: &mut Vec<Move>) {
    let from = piece.square;
    let (forward, captures, start_row, promotion_row) = match piece.color {
        Color::White => (NORTH, [NORTH_WEST, NORTH_EAST], 6, 0),
        Color::Black => (SOUTH, [SOUTH_WEST, SOUTH_EAST], 1, 7),
    };
    let to_edge = &NUM_SQUARES_TO_EDGE[from as usize];
    if to_edge[forward] == 0 {
        return;
    }

    if !allow_own_color {
        let one_step = step(from, forward, 1);
        if board.piece_at(one_step).is_none() {
            push_pawn_move(from, one_step, promotion_row, out);

            if square_row(from) == start_row {
                let two_step = step(from, forward, 2);
                if board.piece_at(two_step).is_none() {
                    out.push(Move::new(from, two_step));
                }
            }
        }
    }

    for direction in captures {
        if to_edge[direction] == 0 {
            continue;
        }

        let target = step(from, direction, 1);
        if allow_own_color {
            out.push(Move::new(from, target));
            continue;
        }

        if let Some(victim) = board.piece_at(target) {
            if victim.color != piece.color {
                push_pawn_move(from, target, promotion_row, out);
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, promotion_row: u8, out: &mut Vec<Move>) {
    if square_row(to) == promotion_row {
        for flag in PROMOTION_FLAGS {
            out.push(Move::with_flag(from, to, flag));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::generate_piece_moves;
    use crate::moves::move_descriptions::{Move, MoveFlag};

    fn pawn_moves(board: &Board, square: Square) -> Vec<Move> {
        let id = board.piece_id_at(square).expect("pawn expected");
        let mut moves = Vec::new();
        generate_piece_moves(board, id, false, &mut moves);
        moves
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let open = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(pawn_moves(&open, 52).len(), 2);

        let blocked_far =
            Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(pawn_moves(&blocked_far, 52), vec![Move::new(52, 44)]);

        let blocked_near =
            Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(pawn_moves(&blocked_near, 52).is_empty());
    }

    #[test]
    fn captures_do_not_wrap_around_the_board() {
        // White pawn a4 with a black rook on h6 (one row up, wrapped column).
        let board = Board::from_fen("4k3/8/7r/8/P7/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(pawn_moves(&board, 32), vec![Move::new(32, 24)]);
    }

    #[test]
    fn black_pawn_captures_diagonally_forward() {
        let board = Board::from_fen("4k3/8/3p4/2N1B3/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let mut targets: Vec<Square> = pawn_moves(&board, 19).into_iter().map(|mv| mv.target).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![26, 27, 28]);
    }

    #[test]
    fn promotion_emits_four_choices() {
        let board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = pawn_moves(&board, 8);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
        assert!(moves.contains(&Move::with_flag(8, 1, MoveFlag::PromoteKnight)));
        assert!(moves.contains(&Move::with_flag(8, 0, MoveFlag::PromoteQueen)));
    }
}
