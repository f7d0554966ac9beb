//! Mailbox board state with an owned piece arena.
//!
//! `Board` is the central model for the engine. It stores the 64-slot square
//! array, per-color piece lists bucketed by kind, side/castling flags, the
//! incrementally maintained attack maps, and the undo stack consumed by
//! make/unmake.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{CastlingRule, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::attack_tracker::{rebuild_attack_maps, AttackMap};
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenerator};
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) squares: [Option<PieceId>; 64],
    // [color][piece_kind]
    pub(crate) piece_lists: [[Vec<PieceId>; 6]; 2],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) castling_rule: CastlingRule,

    // [color]
    pub(crate) attack_maps: [AttackMap; 2],

    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pieces: Vec::with_capacity(32),
            squares: [None; 64],
            piece_lists: Default::default(),
            side_to_move: Color::White,
            castling_rights: 0,
            castling_rule: CastlingRule::default(),
            attack_maps: [AttackMap::new(), AttackMap::new()],
            undo_stack: Vec::new(),
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_position() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Builds a position from piece placements and computes both attack maps.
    pub fn from_pieces(
        placements: &[(PieceKind, Color, Square)],
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        let mut board = Self::empty();
        for &(kind, color, square) in placements {
            board.add_piece(kind, color, square)?;
        }
        board.side_to_move = side_to_move;
        board.castling_rights = castling_rights;
        rebuild_attack_maps(&mut board)?;
        Ok(board)
    }

    pub(crate) fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> ChessResult<PieceId> {
        let slot = self
            .squares
            .get_mut(square as usize)
            .ok_or(ChessError::OutOfBounds(square))?;
        if slot.is_some() {
            return Err(ChessError::SquareOccupied(square));
        }

        let id = self.pieces.len();
        *slot = Some(id);
        self.pieces.push(Piece::new(kind, color, square));
        self.piece_lists[color.index()][kind.index()].push(id);
        Ok(id)
    }

    pub fn with_castling_rule(mut self, rule: CastlingRule) -> Self {
        self.castling_rule = rule;
        self
    }

    #[inline]
    pub fn castling_rule(&self) -> CastlingRule {
        self.castling_rule
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    #[inline]
    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        self.squares.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.piece_id_at(square).map(|id| &self.pieces[id])
    }

    /// 64-slot view of the board for renderers.
    pub fn square_contents(&self) -> [Option<(Color, PieceKind)>; 64] {
        let mut out = [None; 64];
        for (slot, id) in out.iter_mut().zip(self.squares.iter()) {
            *slot = id.map(|id| (self.pieces[id].color, self.pieces[id].kind));
        }
        out
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> &[PieceId] {
        &self.piece_lists[color.index()][kind.index()]
    }

    /// Ids of every on-board piece of `color`, grouped by kind.
    pub fn active_pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.piece_lists[color.index()].iter().flatten().copied()
    }

    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        self.pieces_of(color, PieceKind::King)
            .first()
            .map(|&id| self.pieces[id].square)
            .ok_or(ChessError::KingMissing(color))
    }

    #[inline]
    pub fn attack_map(&self, color: Color) -> &AttackMap {
        &self.attack_maps[color.index()]
    }

    /// Whether any piece of `attacker_color` attacks `square`.
    #[inline]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        self.attack_maps[attacker_color.index()].is_attacked(square)
    }

    #[inline]
    pub fn attackers_of(&self, square: Square, attacker_color: Color) -> &[PieceId] {
        self.attack_maps[attacker_color.index()].attackers(square)
    }

    pub fn is_in_check(&self, color: Color) -> ChessResult<bool> {
        let king = self.king_square(color)?;
        Ok(self.is_square_attacked(king, color.opposite()))
    }

    #[inline]
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        legal_move_apply::make_move(self, mv)
    }

    #[inline]
    pub fn unmake_move(&mut self) -> ChessResult<Move> {
        legal_move_apply::unmake_move(self)
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.undo_stack.last().map(|undo| undo.mv)
    }

    #[inline]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        pseudo_legal_moves(self, color)
    }

    #[inline]
    pub fn legal_moves(&mut self, color: Color) -> ChessResult<Vec<Move>> {
        FastLegalMoveGenerator.generate_legal_moves(self, color)
    }

    pub fn is_checkmate(&mut self, color: Color) -> ChessResult<bool> {
        Ok(self.legal_moves(color)?.is_empty() && self.is_in_check(color)?)
    }

    pub fn is_stalemate(&mut self, color: Color) -> ChessResult<bool> {
        Ok(self.legal_moves(color)?.is_empty() && !self.is_in_check(color)?)
    }

    /// Terminal state for the side to move.
    pub fn status(&mut self) -> ChessResult<GameStatus> {
        let side = self.side_to_move;
        if !self.legal_moves(side)?.is_empty() {
            return Ok(GameStatus::InProgress);
        }
        if self.is_in_check(side)? {
            Ok(GameStatus::Checkmate { loser: side })
        } else {
            Ok(GameStatus::Stalemate)
        }
    }

    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) -> ChessResult<()> {
        if self.squares[to as usize].is_some() {
            return Err(ChessError::SquareOccupied(to));
        }
        let from = self.pieces[id].square;
        self.squares[from as usize] = None;
        self.squares[to as usize] = Some(id);
        self.pieces[id].square = to;
        Ok(())
    }

    /// Takes a captured piece off the board, keeping it in the arena.
    pub(crate) fn lift_piece(&mut self, id: PieceId) {
        let piece = &mut self.pieces[id];
        piece.on_board = false;
        self.squares[piece.square as usize] = None;
        let list = &mut self.piece_lists[piece.color.index()][piece.kind.index()];
        if let Some(pos) = list.iter().position(|&other| other == id) {
            list.swap_remove(pos);
        }
    }

    /// Puts a previously lifted piece back on its square.
    pub(crate) fn restore_piece(&mut self, id: PieceId) -> ChessResult<()> {
        let square = self.pieces[id].square;
        if self.squares[square as usize].is_some() {
            return Err(ChessError::SquareOccupied(square));
        }
        let piece = &mut self.pieces[id];
        piece.on_board = true;
        self.squares[square as usize] = Some(id);
        self.piece_lists[piece.color.index()][piece.kind.index()].push(id);
        Ok(())
    }

    pub(crate) fn change_kind(&mut self, id: PieceId, kind: PieceKind) {
        let piece = &mut self.pieces[id];
        let list = &mut self.piece_lists[piece.color.index()][piece.kind.index()];
        if let Some(pos) = list.iter().position(|&other| other == id) {
            list.swap_remove(pos);
        }
        piece.kind = kind;
        self.piece_lists[piece.color.index()][kind.index()].push(id);
    }

    fn sorted_list_squares(&self, color: Color, kind: PieceKind) -> Vec<Square> {
        let mut squares: Vec<Square> = self
            .pieces_of(color, kind)
            .iter()
            .map(|&id| self.pieces[id].square)
            .collect();
        squares.sort_unstable();
        squares
    }

    fn sorted_attacker_squares(&self, color: Color, square: Square) -> Vec<Square> {
        let mut squares: Vec<Square> = self
            .attackers_of(square, color)
            .iter()
            .map(|&id| self.pieces[id].square)
            .collect();
        squares.sort_unstable();
        squares
    }
}

impl PartialEq for Board {
    /// Positional equality: square contents (including move counters),
    /// side, castling state, piece lists, and attack maps compared as sets.
    fn eq(&self, other: &Self) -> bool {
        if self.side_to_move != other.side_to_move
            || self.castling_rights != other.castling_rights
            || self.castling_rule != other.castling_rule
        {
            return false;
        }

        let same_squares = (0..64u8).all(|sq| match (self.piece_at(sq), other.piece_at(sq)) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.kind == b.kind && a.color == b.color && a.move_count == b.move_count
            }
            _ => false,
        });
        if !same_squares {
            return false;
        }

        for color in [Color::White, Color::Black] {
            for kind in ALL_PIECE_KINDS {
                if self.sorted_list_squares(color, kind) != other.sorted_list_squares(color, kind) {
                    return false;
                }
            }
            for sq in 0..64u8 {
                if self.sorted_attacker_squares(color, sq) != other.sorted_attacker_squares(color, sq)
                {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CASTLE_ALL);
        assert_eq!(board.king_square(Color::White).expect("white king"), 60);
        assert_eq!(board.king_square(Color::Black).expect("black king"), 4);
        assert_eq!(board.active_pieces(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black, PieceKind::Pawn).len(), 8);
        assert_eq!(board.to_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn adding_to_occupied_square_fails() {
        let err = Board::from_pieces(
            &[
                (PieceKind::King, Color::White, 60),
                (PieceKind::Queen, Color::White, 60),
            ],
            Color::White,
            0,
        )
        .expect_err("duplicate square must be rejected");
        assert_eq!(err, ChessError::SquareOccupied(60));
    }

    #[test]
    fn missing_king_is_reported() {
        let board = Board::from_pieces(&[(PieceKind::King, Color::White, 60)], Color::White, 0)
            .expect("board should build");
        assert_eq!(
            board.is_in_check(Color::Black),
            Err(ChessError::KingMissing(Color::Black))
        );
    }

    #[test]
    fn starting_position_attacks() {
        let board = Board::starting_position();
        // f3 (row 5, col 5) is covered by the g1 knight and e2/g2 pawns.
        assert_eq!(board.attackers_of(45, Color::White).len(), 3);
        assert!(!board.is_square_attacked(36, Color::White));
        // The queen defends d2 even though it holds a friendly pawn.
        assert!(board.is_square_attacked(51, Color::White));
        assert!(board.is_square_attacked(20, Color::Black));
    }

    #[test]
    fn square_contents_exposes_renderer_view() {
        let board = Board::starting_position();
        let view = board.square_contents();
        assert_eq!(view[0], Some((Color::Black, PieceKind::Rook)));
        assert_eq!(view[60], Some((Color::White, PieceKind::King)));
        assert_eq!(view[36], None);
    }
}
