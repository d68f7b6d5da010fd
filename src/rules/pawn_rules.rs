//! Pawn movement law: forward-only advances, diagonal captures, en passant.

use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};
use crate::board::square::Square;

/// Pawns advance one square onto an empty square, two from their starting
/// rank when nothing stands in the way, and capture one square diagonally
/// forward. En passant lands on an empty square beside an opposing pawn that
/// double-advanced on the previous move; the swept square sits behind the
/// destination, not on it.
pub fn can_move(board: &Board, id: PieceId, to: Square, ignore: Option<PieceId>) -> bool {
    let piece = board.piece(id);
    let from = piece.square;
    let rank_delta = to.1 - from.1;

    let is_forward = match piece.color {
        Color::Light => rank_delta > 0,
        Color::Dark => rank_delta < 0,
    };
    if !is_forward {
        return false;
    }
    let straight = from.0 == to.0;

    if rank_delta.abs() == 1 && straight && board.piece_at(to).is_none() {
        return true;
    }

    // A pawn off its starting rank has necessarily moved.
    if rank_delta.abs() == 2
        && straight
        && from.1 == piece.color.pawn_rank()
        && board.route_blocked(id, to).is_none()
    {
        return true;
    }

    if (to.0 - from.0).abs() == 1 && rank_delta.abs() == 1 {
        if let Some(occupant) = board.piece_at(to) {
            return piece.is_opponent(board.piece(occupant)) || ignore == Some(occupant);
        }
    }

    if (to.0 - from.0).abs() == 1
        && ((piece.color == Color::Light && from.1 == 4 && to.1 == 5)
            || (piece.color == Color::Dark && from.1 == 3 && to.1 == 2))
    {
        if let Some(side_id) = board.piece_at((to.0, from.1)) {
            let side = board.piece(side_id);
            let double_advanced = matches!(
                board.last_move(),
                Some(last) if last.kind == PieceKind::Pawn
                    && last.to == (to.0, from.1)
                    && (last.from.1 - last.to.1).abs() == 2
            );
            return piece.is_opponent(side) && side.kind == PieceKind::Pawn && double_advanced;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::can_move::can_move as dispatch;

    fn kings_only_board() -> Board {
        let mut board = Board::empty(600);
        board.place(PieceKind::King, Color::Light, (4, 0)).unwrap();
        board.place(PieceKind::King, Color::Dark, (4, 7)).unwrap();
        board
    }

    #[test]
    fn advances_stay_forward_and_unblocked() {
        let mut dut = kings_only_board();
        let pawn = dut.place(PieceKind::Pawn, Color::Light, (2, 1)).unwrap();
        assert!(dispatch(&dut, pawn, (2, 2), None));
        assert!(dispatch(&dut, pawn, (2, 3), None));
        assert!(!dispatch(&dut, pawn, (2, 0), None));
        assert!(!dispatch(&dut, pawn, (2, 4), None));
        assert!(!dispatch(&dut, pawn, (3, 2), None));

        let dark = dut.place(PieceKind::Pawn, Color::Dark, (5, 6)).unwrap();
        assert!(dispatch(&dut, dark, (5, 5), None));
        assert!(dispatch(&dut, dark, (5, 4), None));
        assert!(!dispatch(&dut, dark, (5, 7), None));
    }

    #[test]
    fn double_advance_needs_the_starting_rank_and_a_clear_path() {
        let mut dut = kings_only_board();
        let marched = dut.place(PieceKind::Pawn, Color::Light, (0, 2)).unwrap();
        assert!(!dispatch(&dut, marched, (0, 4), None));

        let pawn = dut.place(PieceKind::Pawn, Color::Light, (1, 1)).unwrap();
        dut.place(PieceKind::Knight, Color::Dark, (1, 2)).unwrap();
        assert!(!dispatch(&dut, pawn, (1, 3), None));

        let second = dut.place(PieceKind::Pawn, Color::Light, (2, 1)).unwrap();
        dut.place(PieceKind::Knight, Color::Dark, (2, 3)).unwrap();
        assert!(!dispatch(&dut, second, (2, 3), None));
    }

    #[test]
    fn captures_only_on_the_forward_diagonal() {
        let mut dut = kings_only_board();
        let pawn = dut.place(PieceKind::Pawn, Color::Light, (3, 3)).unwrap();
        dut.place(PieceKind::Knight, Color::Dark, (4, 4)).unwrap();
        let ally = dut.place(PieceKind::Knight, Color::Light, (2, 4)).unwrap();
        dut.place(PieceKind::Knight, Color::Dark, (3, 4)).unwrap();

        assert!(dispatch(&dut, pawn, (4, 4), None));
        assert!(!dispatch(&dut, pawn, (2, 4), None));
        assert!(dispatch(&dut, pawn, (2, 4), Some(ally)));
        // Straight ahead is a move, never a capture.
        assert!(!dispatch(&dut, pawn, (3, 4), None));
        // Empty diagonals off the en-passant rank offer nothing.
        let lone = dut.place(PieceKind::Pawn, Color::Light, (6, 2)).unwrap();
        assert!(!dispatch(&dut, lone, (7, 3), None));
    }

    #[test]
    fn en_passant_requires_the_recorded_double_advance() {
        let mut dut = kings_only_board();
        let pawn = dut.place(PieceKind::Pawn, Color::Light, (3, 4)).unwrap();
        dut.place(PieceKind::Pawn, Color::Dark, (4, 4)).unwrap();

        // No last move recorded: the side pawn might have arrived long ago.
        assert!(!dispatch(&dut, pawn, (4, 5), None));

        dut.set_last_move(PieceKind::Pawn, (4, 5), (4, 4));
        assert!(!dispatch(&dut, pawn, (4, 5), None));

        dut.set_last_move(PieceKind::Pawn, (4, 6), (4, 4));
        assert!(dispatch(&dut, pawn, (4, 5), None));
    }

    #[test]
    fn en_passant_for_dark_mirrors_the_ranks() {
        let mut dut = kings_only_board();
        let pawn = dut.place(PieceKind::Pawn, Color::Dark, (2, 3)).unwrap();
        dut.place(PieceKind::Pawn, Color::Light, (1, 3)).unwrap();
        dut.set_last_move(PieceKind::Pawn, (1, 1), (1, 3));
        assert!(dispatch(&dut, pawn, (1, 2), None));
        assert!(!dispatch(&dut, pawn, (3, 2), None));
    }
}
