use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `unmake_move`.
///
/// One record is pushed per applied move, so captures and counters are
/// restored from a stack rather than a shared slot.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: PieceId,
    pub captured_piece: Option<PieceId>,
    /// Rook id with its start and destination squares for castling moves.
    pub castling_rook: Option<(PieceId, Square, Square)>,
    /// Kind the moved piece had before a promotion.
    pub promoted_from: Option<PieceKind>,

    pub prev_castling_rights: CastlingRights,
    pub prev_side_to_move: Color,
    pub prev_move_count: u16,
    pub prev_rook_move_count: u16,
}
