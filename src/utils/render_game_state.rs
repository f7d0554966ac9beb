//! Terminal-oriented Unicode board renderer.
//!
//! Draws rank 8 at the top, matching the square indexing where `0 == a8`.
//! The overlay variant marks empty squares attacked by a chosen color.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    render_with_marks(board, |_| false)
}

/// Render the board, marking empty squares attacked by `attacker` with `×`.
pub fn render_board_with_attacks(board: &Board, attacker: Color) -> String {
    render_with_marks(board, |sq| board.is_square_attacked(sq, attacker))
}

fn render_with_marks<F>(board: &Board, marked: F) -> String
where
    F: Fn(Square) -> bool,
{
    let contents = board.square_contents();
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let sq = row * 8 + col;
            match contents[sq as usize] {
                Some((color, kind)) => out.push(piece_to_unicode(color, kind)),
                None if marked(sq) => out.push('×'),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_board_with_attacks};
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_renders_black_on_top() {
        let board = Board::starting_position();
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn overlay_marks_attacked_empty_squares() {
        let board = Board::starting_position();
        let text = render_board_with_attacks(&board, Color::White);
        let lines: Vec<&str> = text.lines().collect();

        // Rank 3 is fully covered by white pawns.
        assert_eq!(lines[6], "3 × × × × × × × × 3");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
    }
}
