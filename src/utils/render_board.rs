//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the console
//! front end. Squares are labeled with the numeric file and rank coordinates
//! the click surface uses.

use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};

/// Render the board to a Unicode string for terminal output.
///
/// Rank 7 is printed at the top, so the light side sits at the bottom of the
/// view.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for rank in (0..8i8).rev() {
        out.push(char::from(b'0' + rank as u8));
        out.push(' ');

        for file in 0..8i8 {
            match board.piece_at((file, rank)) {
                Some(id) => {
                    let piece = board.piece(id);
                    out.push(piece_to_unicode(piece.color, piece.kind));
                }
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank as u8));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_standard_setup() {
        let dut = Board::new(600);
        let view = render_board(&dut);
        let lines: Vec<&str> = view.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "7 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 7");
        assert_eq!(lines[2], "6 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 6");
        assert_eq!(lines[3], "5 · · · · · · · · 5");
        assert_eq!(lines[7], "1 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 1");
        assert_eq!(lines[8], "0 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 0");
        assert_eq!(lines[9], "  0 1 2 3 4 5 6 7");
    }

    #[test]
    fn empty_squares_render_as_dots() {
        let dut = Board::empty(600);
        let view = render_board(&dut);
        assert!(!view.contains('♔'));
        assert_eq!(view.matches('·').count(), 64);
    }
}
