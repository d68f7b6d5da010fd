//! Knight destination highlighting.

use crate::analysis::pins::move_catastrophy;
use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::square::move_square;
use crate::highlights::highlight::{HighlightKind, HighlightSink};

/// The eight L-shaped jumps, probed top to bottom then right to left.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub fn highlight_knight_routes(
    board: &Board,
    id: PieceId,
    pinned: bool,
    sink: &mut impl HighlightSink,
) {
    let piece = board.piece(id);
    for (d_file, d_rank) in KNIGHT_OFFSETS {
        let to = match move_square(piece.square, d_file, d_rank) {
            Ok(to) => to,
            Err(_) => continue,
        };
        if pinned && move_catastrophy(board, id, to) {
            continue;
        }
        match board.piece_at(to) {
            Some(occupant) => {
                if piece.is_opponent(board.piece(occupant)) {
                    sink.highlight(to, HighlightKind::Capture);
                }
            }
            None => sink.highlight(to, HighlightKind::Move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Color, PieceKind};
    use crate::board::square::Square;

    fn flags_of(board: &Board, id: PieceId, pinned: bool) -> Vec<(Square, HighlightKind)> {
        let mut sink = Vec::new();
        highlight_knight_routes(board, id, pinned, &mut sink);
        sink
    }

    #[test]
    fn corner_knight_keeps_only_in_board_jumps() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (4, 4)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (4, 6)).unwrap();
        let knight = dut.place(PieceKind::Knight, Color::Light, (0, 0)).unwrap();

        let flags = flags_of(&dut, knight, false);
        assert_eq!(flags.len(), 2);
        assert!(flags.contains(&((1, 2), HighlightKind::Move)));
        assert!(flags.contains(&((2, 1), HighlightKind::Move)));
    }

    #[test]
    fn occupants_turn_flags_into_captures_or_nothing() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (7, 7)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (7, 5)).unwrap();
        let knight = dut.place(PieceKind::Knight, Color::Light, (0, 0)).unwrap();
        dut.place(PieceKind::Pawn, Color::Dark, (1, 2)).unwrap();
        dut.place(PieceKind::Pawn, Color::Light, (2, 1)).unwrap();

        assert_eq!(flags_of(&dut, knight, false), vec![((1, 2), HighlightKind::Capture)]);
    }

    #[test]
    fn pinned_knight_has_no_destinations() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (4, 0)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (0, 7)).unwrap();
        let knight = dut.place(PieceKind::Knight, Color::Light, (4, 3)).unwrap();
        dut.place(PieceKind::Queen, Color::Dark, (4, 6)).unwrap();

        // Every jump leaves the pinned file.
        assert_eq!(flags_of(&dut, knight, true), vec![]);
        assert!(!flags_of(&dut, knight, false).is_empty());
    }
}
