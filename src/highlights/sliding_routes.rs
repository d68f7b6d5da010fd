//! Sliding destination highlighting for rooks, bishops, and queens.
//!
//! Both walkers advance all four of their directions in lockstep, flagging
//! squares until each direction runs off the board or hits a piece. A pinned
//! slider keeps its blocked bookkeeping but drops any flag whose move would
//! expose its own king.

use crate::analysis::pins::move_catastrophy;
use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::square::Square;
use crate::highlights::highlight::{HighlightKind, HighlightSink};

/// Walks up, down, right, and left from the piece's square.
pub fn highlight_straight(board: &Board, id: PieceId, pinned: bool, sink: &mut impl HighlightSink) {
    let (x, y) = board.piece(id).square;
    let mut upper_blocked = false;
    let mut lower_blocked = false;
    let mut right_blocked = false;
    let mut left_blocked = false;

    for advance in 1..8i8 {
        if !upper_blocked && y + advance <= 7 {
            upper_blocked = probe(board, id, (x, y + advance), pinned, sink);
        }
        if !lower_blocked && y - advance >= 0 {
            lower_blocked = probe(board, id, (x, y - advance), pinned, sink);
        }
        if !right_blocked && x + advance <= 7 {
            right_blocked = probe(board, id, (x + advance, y), pinned, sink);
        }
        if !left_blocked && x - advance >= 0 {
            left_blocked = probe(board, id, (x - advance, y), pinned, sink);
        }
    }
}

/// Walks the four diagonals from the piece's square.
pub fn highlight_diagonal(board: &Board, id: PieceId, pinned: bool, sink: &mut impl HighlightSink) {
    let (x, y) = board.piece(id).square;
    let mut upper_right_blocked = false;
    let mut lower_right_blocked = false;
    let mut upper_left_blocked = false;
    let mut lower_left_blocked = false;

    for advance in 1..8i8 {
        if !upper_right_blocked && x + advance <= 7 && y + advance <= 7 {
            upper_right_blocked = probe(board, id, (x + advance, y + advance), pinned, sink);
        }
        if !lower_right_blocked && x + advance <= 7 && y - advance >= 0 {
            lower_right_blocked = probe(board, id, (x + advance, y - advance), pinned, sink);
        }
        if !upper_left_blocked && x - advance >= 0 && y + advance <= 7 {
            upper_left_blocked = probe(board, id, (x - advance, y + advance), pinned, sink);
        }
        if !lower_left_blocked && x - advance >= 0 && y - advance >= 0 {
            lower_left_blocked = probe(board, id, (x - advance, y - advance), pinned, sink);
        }
    }
}

/// Flags one square and reports whether the direction is now blocked.
fn probe(
    board: &Board,
    id: PieceId,
    to: Square,
    pinned: bool,
    sink: &mut impl HighlightSink,
) -> bool {
    match board.piece_at(to) {
        Some(occupant) => {
            if board.piece(id).is_opponent(board.piece(occupant))
                && (!pinned || !move_catastrophy(board, id, to))
            {
                sink.highlight(to, HighlightKind::Capture);
            }
            true
        }
        None => {
            if !pinned || !move_catastrophy(board, id, to) {
                sink.highlight(to, HighlightKind::Move);
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Color, PieceKind};

    fn flags_of(
        board: &Board,
        id: PieceId,
        pinned: bool,
        diagonal: bool,
    ) -> Vec<(Square, HighlightKind)> {
        let mut sink = Vec::new();
        if diagonal {
            highlight_diagonal(board, id, pinned, &mut sink);
        } else {
            highlight_straight(board, id, pinned, &mut sink);
        }
        sink
    }

    #[test]
    fn straight_walk_stops_at_blockers_per_direction() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (7, 7)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (7, 5)).unwrap();
        let rook = dut.place(PieceKind::Rook, Color::Light, (3, 3)).unwrap();
        dut.place(PieceKind::Pawn, Color::Dark, (3, 5)).unwrap();
        dut.place(PieceKind::Pawn, Color::Light, (1, 3)).unwrap();

        let flags = flags_of(&dut, rook, false, false);
        // Up: one open square, then the capture.
        assert!(flags.contains(&((3, 4), HighlightKind::Move)));
        assert!(flags.contains(&((3, 5), HighlightKind::Capture)));
        assert!(!flags.iter().any(|(square, _)| *square == (3, 6)));
        // Left: one open square, the friendly pawn closes the direction.
        assert!(flags.contains(&((2, 3), HighlightKind::Move)));
        assert!(!flags.iter().any(|(square, _)| *square == (1, 3)));
        assert!(!flags.iter().any(|(square, _)| *square == (0, 3)));
        // Down and right run to the board edge.
        assert!(flags.contains(&((3, 0), HighlightKind::Move)));
        assert!(flags.contains(&((7, 3), HighlightKind::Move)));
    }

    #[test]
    fn diagonal_walk_mirrors_the_straight_behavior() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (0, 7)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (2, 7)).unwrap();
        let bishop = dut.place(PieceKind::Bishop, Color::Light, (3, 3)).unwrap();
        dut.place(PieceKind::Knight, Color::Dark, (5, 5)).unwrap();

        let flags = flags_of(&dut, bishop, false, true);
        assert!(flags.contains(&((4, 4), HighlightKind::Move)));
        assert!(flags.contains(&((5, 5), HighlightKind::Capture)));
        assert!(!flags.iter().any(|(square, _)| *square == (6, 6)));
        assert!(flags.contains(&((0, 0), HighlightKind::Move)));
        assert!(flags.contains(&((0, 6), HighlightKind::Move)));
        assert!(flags.contains(&((6, 0), HighlightKind::Move)));
    }

    #[test]
    fn pinned_rook_is_confined_to_its_pin_line() {
        let mut dut = Board::empty(600);
        dut.place(PieceKind::King, Color::Light, (4, 0)).unwrap();
        dut.place(PieceKind::King, Color::Dark, (0, 7)).unwrap();
        let rook = dut.place(PieceKind::Rook, Color::Light, (4, 3)).unwrap();
        dut.place(PieceKind::Rook, Color::Dark, (4, 6)).unwrap();

        let flags = flags_of(&dut, rook, true, false);
        assert_eq!(
            flags,
            vec![
                ((4, 4), HighlightKind::Move),
                ((4, 2), HighlightKind::Move),
                ((4, 5), HighlightKind::Move),
                ((4, 1), HighlightKind::Move),
                ((4, 6), HighlightKind::Capture),
            ]
        );
    }
}
