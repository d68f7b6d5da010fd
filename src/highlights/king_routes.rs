//! King destination highlighting: ordinary steps, castle offers, and the
//! evade set shown while the king is in check.

use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::square::{move_square, Square};
use crate::highlights::highlight::{HighlightKind, HighlightSink};
use crate::rules::can_move::can_move;

/// The eight adjacent steps, probed sideways first, then the diagonals.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Flags the king's reachable neighbors and, when its movement law allows
/// the two-square hop, the castling destinations.
pub fn highlight_king_routes(board: &Board, id: PieceId, sink: &mut impl HighlightSink) {
    let piece = board.piece(id);
    for (d_file, d_rank) in KING_OFFSETS {
        let to = match move_square(piece.square, d_file, d_rank) {
            Ok(to) => to,
            Err(_) => continue,
        };
        if can_move(board, id, to, None) {
            match board.piece_at(to) {
                Some(_) => sink.highlight(to, HighlightKind::Capture),
                None => sink.highlight(to, HighlightKind::Move),
            }
        }
    }

    for hop in [2, -2] {
        if let Ok(to) = move_square(piece.square, hop, 0) {
            if can_move(board, id, to, None) {
                sink.highlight(to, HighlightKind::Castling);
            }
        }
    }
}

/// Flags the squares the on-turn king can escape to while checked. Does
/// nothing unless an attacker is recorded.
pub fn highlight_king_evade(board: &Board, sink: &mut impl HighlightSink) {
    let color = board.turn_color();
    if board.check_state(color).attacker.is_none() {
        return;
    }
    let king = board.king(color);
    let square = board.piece(king).square;

    let mut safe_squares: Vec<Square> = Vec::new();
    for (d_file, d_rank) in KING_OFFSETS {
        let to = match move_square(square, d_file, d_rank) {
            Ok(to) => to,
            Err(_) => continue,
        };
        if can_move(board, king, to, None) {
            safe_squares.push(to);
        }
    }

    for to in safe_squares {
        match board.piece_at(to) {
            Some(_) => sink.highlight(to, HighlightKind::Capture),
            None => sink.highlight(to, HighlightKind::Move),
        }
    }
}
