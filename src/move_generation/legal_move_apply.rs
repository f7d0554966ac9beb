//! Destructive make/unmake on the board.
//!
//! Every `make_move` pushes one `UndoState`; `unmake_move` pops it and
//! restores squares, piece lists, promotion, castling rights, move counters,
//! side to move, and the attack maps.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castling_rook_squares, king_home, rights_cleared_by_square};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::attack_tracker::refresh_attacks;
use crate::moves::move_descriptions::Move;

pub fn make_move(board: &mut Board, mv: Move) -> ChessResult<()> {
    // Every check runs before the first mutation so a rejected move leaves
    // the board exactly as it was.
    for square in [mv.start, mv.target] {
        if square >= 64 {
            return Err(ChessError::OutOfBounds(square));
        }
    }

    let moved = board
        .piece_id_at(mv.start)
        .ok_or(ChessError::EmptySquare(mv.start))?;
    let mover = board.pieces[moved].color;
    if mover != board.side_to_move {
        return Err(ChessError::IllegalMove(format!(
            "{mover:?} piece on {} cannot move on {:?}'s turn",
            mv.start, board.side_to_move
        )));
    }

    let captured = board.piece_id_at(mv.target);
    if let Some(victim) = captured {
        if board.pieces[victim].color == mover || mv.is_castling() {
            return Err(ChessError::SquareOccupied(mv.target));
        }
    }

    let castling_rook = if mv.is_castling() {
        Some(castling_rook_for(board, mv, moved)?)
    } else {
        None
    };

    let promoted_from = match mv.promotion_kind() {
        Some(_) if board.pieces[moved].kind != PieceKind::Pawn => {
            return Err(ChessError::IllegalMove(format!(
                "only pawns promote, found {:?} on {}",
                board.pieces[moved].kind, mv.start
            )));
        }
        Some(_) => Some(PieceKind::Pawn),
        None => None,
    };

    board.undo_stack.push(UndoState {
        mv,
        moved_piece: moved,
        captured_piece: captured,
        castling_rook,
        promoted_from,
        prev_castling_rights: board.castling_rights,
        prev_side_to_move: board.side_to_move,
        prev_move_count: board.pieces[moved].move_count,
        prev_rook_move_count: castling_rook
            .map(|(rook, _, _)| board.pieces[rook].move_count)
            .unwrap_or(0),
    });

    if let Some(victim) = captured {
        board.lift_piece(victim);
    }

    board.relocate(moved, mv.target)?;
    board.pieces[moved].move_count = board.pieces[moved].move_count.saturating_add(1);
    if let Some(kind) = mv.promotion_kind() {
        board.change_kind(moved, kind);
    }

    if let Some((rook, _, rook_to)) = castling_rook {
        board.relocate(rook, rook_to)?;
        board.pieces[rook].move_count = board.pieces[rook].move_count.saturating_add(1);
    }

    board.castling_rights &=
        !(rights_cleared_by_square(mv.start) | rights_cleared_by_square(mv.target));
    board.side_to_move = mover.opposite();

    refresh_after(board, mv, moved, captured, castling_rook)
}

pub fn unmake_move(board: &mut Board) -> ChessResult<Move> {
    let undo = board.undo_stack.pop().ok_or(ChessError::NothingToUnmake)?;
    let mv = undo.mv;

    if let Some((rook, rook_from, _)) = undo.castling_rook {
        board.relocate(rook, rook_from)?;
        board.pieces[rook].move_count = undo.prev_rook_move_count;
    }

    if let Some(kind) = undo.promoted_from {
        board.change_kind(undo.moved_piece, kind);
    }
    board.relocate(undo.moved_piece, mv.start)?;
    board.pieces[undo.moved_piece].move_count = undo.prev_move_count;

    if let Some(victim) = undo.captured_piece {
        board.restore_piece(victim)?;
    }

    board.castling_rights = undo.prev_castling_rights;
    board.side_to_move = undo.prev_side_to_move;

    refresh_after(
        board,
        mv,
        undo.moved_piece,
        undo.captured_piece,
        undo.castling_rook,
    )?;

    Ok(mv)
}

/// Rook id and squares for a castling move, checked without touching the board.
fn castling_rook_for(
    board: &Board,
    mv: Move,
    king: PieceId,
) -> ChessResult<(PieceId, Square, Square)> {
    let color = board.pieces[king].color;
    let two_files = mv.target == mv.start + 2 || mv.start.checked_sub(2) == Some(mv.target);
    if board.pieces[king].kind != PieceKind::King || mv.start != king_home(color) || !two_files {
        return Err(ChessError::IllegalMove(format!(
            "no castling from {} to {}",
            mv.start, mv.target
        )));
    }

    let (rook_from, rook_to) = castling_rook_squares(mv.start, mv.target);
    let rook = board
        .piece_id_at(rook_from)
        .filter(|&id| board.pieces[id].kind == PieceKind::Rook && board.pieces[id].color == color)
        .ok_or(ChessError::CastlingRookMissing(rook_from))?;
    if board.piece_id_at(rook_to).is_some() {
        return Err(ChessError::SquareOccupied(rook_to));
    }

    Ok((rook, rook_from, rook_to))
}

fn refresh_after(
    board: &mut Board,
    mv: Move,
    moved: PieceId,
    captured: Option<PieceId>,
    castling_rook: Option<(PieceId, Square, Square)>,
) -> ChessResult<()> {
    let mut changed = vec![mv.start, mv.target];
    let mut touched = vec![moved];
    if let Some(victim) = captured {
        touched.push(victim);
    }
    if let Some((rook, rook_from, rook_to)) = castling_rook {
        touched.push(rook);
        changed.push(rook_from);
        changed.push(rook_to);
    }

    refresh_attacks(board, &changed, &touched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::moves::move_descriptions::MoveFlag;

    fn assert_round_trip(fen: &str) {
        let mut board = Board::from_fen(fen).expect("FEN should parse");
        let side = board.side_to_move();
        let reference = board.clone();

        for mv in board.legal_moves(side).expect("legal moves") {
            board.make_move(mv).expect("make should succeed");
            let undone = board.unmake_move().expect("unmake should succeed");
            assert_eq!(undone, mv);
            assert!(board == reference, "round trip of {mv:?} changed the position");
        }
    }

    #[test]
    fn round_trip_restores_every_position() {
        assert_round_trip(STARTING_POSITION_FEN);
        assert_round_trip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        assert_round_trip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1");
        assert_round_trip("1n2k3/P7/8/8/8/8/6p1/4K2R w K - 0 1");
        assert_round_trip("1n2k3/P7/8/8/8/8/6p1/4K2R b K - 0 1");
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        board
            .make_move(Move::with_flag(60, 62, MoveFlag::Castling))
            .expect("castle should apply");

        assert_eq!(board.piece_at(62).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.piece_at(61).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(board.piece_at(63).is_none());
        assert_eq!(board.castling_rights(), CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(board.piece_at(61).map(|p| p.move_count), Some(1));

        board.unmake_move().expect("unmake should succeed");
        assert_eq!(board.castling_rights(), CASTLE_ALL);
        assert_eq!(board.piece_at(63).map(|p| p.move_count), Some(0));
        assert_eq!(board.piece_at(60).map(|p| p.move_count), Some(0));
    }

    #[test]
    fn rook_move_and_rook_capture_clear_single_rights() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        // Ra1xa8 clears white queenside and black queenside.
        board.make_move(Move::new(56, 0)).expect("capture should apply");
        assert_eq!(board.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE);

        // Moving the rook back does not re-grant anything.
        board.make_move(Move::new(4, 3)).expect("king move should apply");
        board.make_move(Move::new(0, 56)).expect("rook move should apply");
        assert_eq!(board.castling_rights(), CASTLE_WHITE_KINGSIDE);
    }

    #[test]
    fn promotion_changes_kind_and_unmake_restores_pawn() {
        let mut board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        board
            .make_move(Move::with_flag(8, 1, MoveFlag::PromoteRook))
            .expect("promotion capture should apply");
        assert_eq!(board.piece_at(1).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(board.pieces_of(Color::White, PieceKind::Pawn).len(), 0);
        assert_eq!(board.pieces_of(Color::White, PieceKind::Rook).len(), 1);
        assert!(board.pieces_of(Color::Black, PieceKind::Knight).is_empty());

        board.unmake_move().expect("unmake should succeed");
        assert_eq!(board.piece_at(8).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(board.piece_at(1).map(|p| p.kind), Some(PieceKind::Knight));
    }

    #[test]
    fn nested_captures_restore_in_reverse_order() {
        // Rook trade on d5 then recapture: three captures stacked.
        let mut board =
            Board::from_fen("3rk3/8/8/3q4/8/8/3Q4/3RK3 w - - 0 1").expect("FEN should parse");
        let reference = board.clone();

        board.make_move(Move::new(51, 27)).expect("Qxd5");
        board.make_move(Move::new(3, 27)).expect("Rxd5");
        board.make_move(Move::new(59, 27)).expect("Rxd5");
        assert_eq!(board.history_len(), 3);

        for _ in 0..3 {
            board.unmake_move().expect("unmake should succeed");
        }
        assert!(board == reference);
        assert_eq!(board.unmake_move(), Err(ChessError::NothingToUnmake));
    }

    #[test]
    fn invalid_moves_are_rejected() {
        let mut board = Board::starting_position();
        assert_eq!(board.make_move(Move::new(36, 28)), Err(ChessError::EmptySquare(36)));
        assert_eq!(board.make_move(Move::new(59, 51)), Err(ChessError::SquareOccupied(51)));
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn blocked_castle_is_rejected_without_side_effects() {
        // Bishop on f1 sits on the rook's landing square.
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4KB1R w K - 0 1").expect("FEN should parse");
        let before = board.clone();

        assert_eq!(
            board.make_move(Move::with_flag(60, 62, MoveFlag::Castling)),
            Err(ChessError::SquareOccupied(61))
        );
        assert!(board == before);
        assert_eq!(board.history_len(), 0);
        assert_eq!(board.piece_at(60).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.unmake_move(), Err(ChessError::NothingToUnmake));
    }

    #[test]
    fn castle_needs_own_rook_in_the_corner() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K2n w K - 0 1").expect("FEN should parse");
        let before = board.clone();

        assert_eq!(
            board.make_move(Move::with_flag(60, 62, MoveFlag::Castling)),
            Err(ChessError::CastlingRookMissing(63))
        );
        assert!(board == before);
        assert_eq!(board.history_len(), 0);

        // Still playable afterwards.
        board.make_move(Move::new(60, 52)).expect("king move should apply");
        board.unmake_move().expect("unmake should succeed");
        assert!(board == before);
    }

    #[test]
    fn only_the_side_to_move_may_move() {
        let mut board = Board::starting_position();
        let before = board.clone();

        let result = board.make_move(Move::new(12, 28));
        assert!(matches!(result, Err(ChessError::IllegalMove(_))));
        assert!(board == before);
        assert_eq!(board.history_len(), 0);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn off_board_target_is_rejected() {
        let mut board = Board::starting_position();
        assert_eq!(board.make_move(Move::new(52, 64)), Err(ChessError::OutOfBounds(64)));
        assert_eq!(board.history_len(), 0);
    }
}
