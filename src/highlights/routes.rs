//! Route dispatch: one entry point per selection, fanned out by piece kind.

use crate::analysis::intercept::intercept_squares;
use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::piece::PieceKind;
use crate::highlights::highlight::{HighlightKind, HighlightSink};
use crate::highlights::king_routes::highlight_king_routes;
use crate::highlights::knight_routes::highlight_knight_routes;
use crate::highlights::pawn_routes::highlight_pawn_routes;
use crate::highlights::sliding_routes::{highlight_diagonal, highlight_straight};
use crate::rules::can_move::{can_attack, can_move};

/// Flags every destination the selected piece's movement law offers. The
/// `pinned` verdict thins each variant's set through the catastrophy probe;
/// the queen walks both line families.
pub fn highlight_routes(board: &Board, id: PieceId, pinned: bool, sink: &mut impl HighlightSink) {
    match board.piece(id).kind {
        PieceKind::Pawn => highlight_pawn_routes(board, id, pinned, sink),
        PieceKind::Knight => highlight_knight_routes(board, id, pinned, sink),
        PieceKind::Bishop => highlight_diagonal(board, id, pinned, sink),
        PieceKind::Rook => highlight_straight(board, id, pinned, sink),
        PieceKind::Queen => {
            highlight_diagonal(board, id, pinned, sink);
            highlight_straight(board, id, pinned, sink);
        }
        PieceKind::King => highlight_king_routes(board, id, sink),
    }
}

/// For a non-king defender while its king is checked: flags the reachable
/// squares between the recorded attacker and the king, plus the attacker
/// itself when the defender can take it. With several simultaneous
/// attackers only the recorded one is answered.
pub fn highlight_intercept_route(board: &Board, id: PieceId, sink: &mut impl HighlightSink) {
    let piece = board.piece(id);
    if piece.kind == PieceKind::King {
        return;
    }
    let attacker = match board.check_state(piece.color).attacker {
        Some(attacker) => attacker,
        None => return,
    };
    let king_square = board.piece(board.king(piece.color)).square;

    for square in intercept_squares(board, attacker, king_square) {
        if can_move(board, id, square, None) {
            sink.highlight(square, HighlightKind::Move);
        }
    }
    if can_attack(board, id, attacker) {
        sink.highlight(board.piece(attacker).square, HighlightKind::Capture);
    }
}
