//! Bishop movement law.

use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::square::{is_diagonal_line, Square};
use crate::rules::can_move::destination_open;

/// A 45-degree diagonal with nothing in between. Like the rook, a mid-path
/// blocker stops the bishop even when it is the ignored piece.
pub fn can_move(board: &Board, id: PieceId, to: Square, ignore: Option<PieceId>) -> bool {
    let from = board.piece(id).square;
    if is_diagonal_line(from, to) {
        if board.route_blocked(id, to).is_some() {
            return false;
        }
        return destination_open(board, id, to, ignore);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Color, PieceKind};
    use crate::rules::can_move::can_move as dispatch;

    #[test]
    fn diagonals_only_with_a_clear_path() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (0, 0)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (0, 7)).unwrap();
        let bishop = dut.place(PieceKind::Bishop, Color::Light, (2, 2)).unwrap();

        assert!(dispatch(&dut, bishop, (6, 6), None));
        assert!(dispatch(&dut, bishop, (4, 0), None));
        assert!(!dispatch(&dut, bishop, (2, 6), None));
        assert!(!dispatch(&dut, bishop, (5, 4), None));

        dut.place(PieceKind::Pawn, Color::Dark, (4, 4)).unwrap();
        assert!(!dispatch(&dut, bishop, (6, 6), None));
        assert!(dispatch(&dut, bishop, (4, 4), None));
        assert!(dispatch(&dut, bishop, (3, 3), None));
    }

    #[test]
    fn friendly_destination_needs_the_ignore_escape() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (0, 0)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (0, 7)).unwrap();
        let bishop = dut.place(PieceKind::Bishop, Color::Light, (1, 1)).unwrap();
        let ally = dut.place(PieceKind::Pawn, Color::Light, (4, 4)).unwrap();

        assert!(!dispatch(&dut, bishop, (4, 4), None));
        assert!(dispatch(&dut, bishop, (4, 4), Some(ally)));
    }
}
