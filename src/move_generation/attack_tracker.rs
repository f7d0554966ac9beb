//! Incrementally maintained attack maps.
//!
//! Each color keeps a fixed 64-slot table of attacker lists. A square is
//! attacked exactly when its list is non-empty. Every piece caches the squares
//! it attacked at its last refresh so its stale entries can be removed without
//! a full rescan.
//!
//! After a board mutation only the pieces touched by the move and the sliders
//! whose rays cross a vacated or newly occupied square are refreshed.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_piece_moves;
use crate::moves::edge_distances::{step, NUM_SQUARES_TO_EDGE};

#[derive(Debug, Clone)]
pub struct AttackMap {
    attackers: [Vec<PieceId>; 64],
}

impl Default for AttackMap {
    fn default() -> Self {
        Self::new()
    }
}

impl AttackMap {
    pub fn new() -> Self {
        Self {
            attackers: std::array::from_fn(|_| Vec::new()),
        }
    }

    #[inline]
    pub fn is_attacked(&self, square: Square) -> bool {
        !self.attackers[square as usize].is_empty()
    }

    #[inline]
    pub fn attackers(&self, square: Square) -> &[PieceId] {
        &self.attackers[square as usize]
    }

    /// Squares with at least one attacker, in index order.
    pub fn attacked_squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..64u8).filter(move |&sq| self.is_attacked(sq))
    }

    #[inline]
    fn add_attacker(&mut self, square: Square, piece: PieceId) {
        self.attackers[square as usize].push(piece);
    }

    fn remove_attacker(&mut self, square: Square, piece: PieceId) -> ChessResult<()> {
        let list = &mut self.attackers[square as usize];
        let pos = list
            .iter()
            .position(|&other| other == piece)
            .ok_or(ChessError::AttackTrackerDesync { square, piece })?;
        list.swap_remove(pos);
        Ok(())
    }

    fn clear(&mut self) {
        for list in &mut self.attackers {
            list.clear();
        }
    }
}

/// Squares covered by the piece, including squares held by its own color.
pub fn piece_attack_squares(board: &Board, id: PieceId) -> Vec<Square> {
    let mut coverage = Vec::with_capacity(28);
    generate_piece_moves(board, id, true, &mut coverage);

    let mut squares: Vec<Square> = coverage.into_iter().map(|mv| mv.target).collect();
    squares.dedup();
    squares
}

/// Recomputes both attack maps from scratch.
pub fn rebuild_attack_maps(board: &mut Board) -> ChessResult<()> {
    for map in &mut board.attack_maps {
        map.clear();
    }
    for piece in &mut board.pieces {
        piece.attacked_squares.clear();
    }

    let ids: Vec<PieceId> = board
        .active_pieces(Color::White)
        .chain(board.active_pieces(Color::Black))
        .collect();
    for id in ids {
        recompute_piece_attacks(board, id)?;
    }

    Ok(())
}

/// Refreshes the attack maps after the squares in `changed` switched
/// occupancy. `touched` lists pieces that moved, promoted, or left/returned
/// to the board; they are always refreshed.
pub fn refresh_attacks(
    board: &mut Board,
    changed: &[Square],
    touched: &[PieceId],
) -> ChessResult<()> {
    let mut dirty: Vec<PieceId> = touched.to_vec();
    for &square in changed {
        collect_revealed_sliders(board, square, &mut dirty);
    }
    dirty.sort_unstable();
    dirty.dedup();

    for id in dirty {
        recompute_piece_attacks(board, id)?;
    }

    Ok(())
}

/// Pushes every slider whose line of sight reaches `square`.
fn collect_revealed_sliders(board: &Board, square: Square, out: &mut Vec<PieceId>) {
    for direction in 0..8 {
        let orthogonal = direction < 4;
        for distance in 1..=NUM_SQUARES_TO_EDGE[square as usize][direction] {
            let Some(id) = board.piece_id_at(step(square, direction, distance)) else {
                continue;
            };

            let kind = board.pieces[id].kind;
            let slides_here = match kind {
                PieceKind::Queen => true,
                PieceKind::Rook => orthogonal,
                PieceKind::Bishop => !orthogonal,
                _ => false,
            };
            if slides_here {
                out.push(id);
            }
            break;
        }
    }
}

fn recompute_piece_attacks(board: &mut Board, id: PieceId) -> ChessResult<()> {
    let color = board.pieces[id].color;
    let stale = std::mem::take(&mut board.pieces[id].attacked_squares);
    for square in stale {
        board.attack_maps[color.index()].remove_attacker(square, id)?;
    }

    if !board.pieces[id].on_board {
        return Ok(());
    }

    let fresh = piece_attack_squares(board, id);
    for &square in &fresh {
        board.attack_maps[color.index()].add_attacker(square, id);
    }
    board.pieces[id].attacked_squares = fresh;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::Move;

    fn assert_matches_full_rebuild(board: &Board) {
        let mut rebuilt = board.clone();
        rebuild_attack_maps(&mut rebuilt).expect("rebuild should succeed");
        assert!(*board == rebuilt, "incremental attack maps drifted from a full rebuild");
    }

    #[test]
    fn rook_attack_extends_after_blocker_leaves() {
        // White rook a1, white knight a3, black king h8, white king h1.
        let mut board = Board::from_fen("7k/8/8/8/8/N7/8/R6K w - - 0 1").expect("FEN should parse");
        // a4 (row 4, col 0) is hidden behind the knight on a3 (row 5, col 0).
        assert!(!board.is_square_attacked(32, Color::White));

        // Knight a3 -> b5 opens the file.
        board.make_move(Move::new(40, 25)).expect("move should apply");
        assert!(board.is_square_attacked(32, Color::White));
        assert!(board.is_square_attacked(0, Color::White));
        assert_matches_full_rebuild(&board);

        board.unmake_move().expect("unmake should succeed");
        assert!(!board.is_square_attacked(32, Color::White));
        assert_matches_full_rebuild(&board);
    }

    #[test]
    fn clearing_a_diagonal_extends_bishop_coverage() {
        let mut board =
            Board::from_fen("k7/8/8/8/8/8/1P6/B6K w - - 0 1").expect("FEN should parse");
        let before = board.attackers_of(49, Color::White).len();
        assert_eq!(before, 1);
        assert!(!board.is_square_attacked(35, Color::White));

        // Pawn b2 -> b3 leaves the a1-h8 diagonal.
        board.make_move(Move::new(49, 41)).expect("move should apply");
        assert!(board.is_square_attacked(35, Color::White));
        assert_matches_full_rebuild(&board);
    }

    #[test]
    fn captured_piece_stops_attacking() {
        let mut board =
            Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        assert!(board.is_square_attacked(0, Color::Black));

        board.make_move(Move::new(59, 27)).expect("capture should apply");
        assert!(!board.is_square_attacked(0, Color::Black));
        assert!(board.attack_map(Color::Black).attacked_squares().all(|sq| {
            board
                .attackers_of(sq, Color::Black)
                .iter()
                .all(|&id| board.piece(id).kind == PieceKind::King)
        }));
        assert_matches_full_rebuild(&board);

        board.unmake_move().expect("unmake should succeed");
        assert!(board.is_square_attacked(0, Color::Black));
        assert_matches_full_rebuild(&board);
    }

    #[test]
    fn removing_unknown_attacker_is_a_desync() {
        let mut map = AttackMap::new();
        map.add_attacker(10, 3);
        assert_eq!(
            map.remove_attacker(10, 4),
            Err(ChessError::AttackTrackerDesync { square: 10, piece: 4 })
        );
        map.remove_attacker(10, 3).expect("known attacker should be removed");
        assert!(!map.is_attacked(10));
    }

    #[test]
    fn pawns_cover_diagonals_only() {
        let board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let pawn = board.piece_id_at(52).expect("pawn on e2");
        let mut covered = piece_attack_squares(&board, pawn);
        covered.sort_unstable();
        assert_eq!(covered, vec![43, 45]);
    }
}
