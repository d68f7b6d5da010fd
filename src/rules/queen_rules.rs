//! Queen movement law.

use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::square::{is_diagonal_line, is_straight_line, Square};
use crate::rules::can_move::destination_open;

/// A straight or diagonal line. Uniquely among the sliders, the queen's law
/// excuses a mid-path blocker when it is the ignored piece, so a queen "sees
/// through" the piece a pin probe lifts.
pub fn can_move(board: &Board, id: PieceId, to: Square, ignore: Option<PieceId>) -> bool {
    let from = board.piece(id).square;
    if is_straight_line(from, to) || is_diagonal_line(from, to) {
        let blocker = board.route_blocked(id, to);
        if destination_open(board, id, to, ignore) {
            return match blocker {
                Some(blocker_id) => ignore == Some(blocker_id),
                None => true,
            };
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Color, PieceKind};
    use crate::rules::can_move::can_move as dispatch;

    #[test]
    fn moves_along_both_line_families() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (0, 7)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (7, 7)).unwrap();
        let queen = dut.place(PieceKind::Queen, Color::Light, (3, 0)).unwrap();

        assert!(dispatch(&dut, queen, (3, 6), None));
        assert!(dispatch(&dut, queen, (0, 0), None));
        assert!(dispatch(&dut, queen, (6, 3), None));
        assert!(!dispatch(&dut, queen, (4, 2), None));
        assert!(!dispatch(&dut, queen, (3, 0), None));
    }

    #[test]
    fn sees_through_only_the_ignored_blocker() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (0, 7)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (7, 7)).unwrap();
        let queen = dut.place(PieceKind::Queen, Color::Light, (0, 0)).unwrap();
        let shield = dut.place(PieceKind::Bishop, Color::Light, (0, 3)).unwrap();
        let other = dut.place(PieceKind::Pawn, Color::Dark, (2, 2)).unwrap();

        assert!(!dispatch(&dut, queen, (0, 5), None));
        assert!(dispatch(&dut, queen, (0, 5), Some(shield)));
        assert!(!dispatch(&dut, queen, (0, 5), Some(other)));

        // The destination gate still applies with a blocker excused.
        dut.place(PieceKind::Knight, Color::Light, (0, 5)).unwrap();
        assert!(!dispatch(&dut, queen, (0, 5), Some(shield)));
    }
}
