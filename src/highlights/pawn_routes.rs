//! Pawn destination highlighting.

use crate::analysis::pins::move_catastrophy;
use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};
use crate::board::square::move_square;
use crate::highlights::highlight::{HighlightKind, HighlightSink};

/// Flags the pawn's advances, diagonal captures, and any en passant capture
/// the recorded last move allows. With promotion out of the picture a pawn
/// can sit on the final rank, so every probe is bounds checked.
pub fn highlight_pawn_routes(
    board: &Board,
    id: PieceId,
    pinned: bool,
    sink: &mut impl HighlightSink,
) {
    let piece = board.piece(id);
    let (x, y) = piece.square;
    let forward = piece.color.forward();

    // Forward advances: the two-square probe only matters from the pawn's
    // starting rank, and only behind an open single step.
    if let Ok(one) = move_square(piece.square, 0, forward) {
        if board.piece_at(one).is_none() {
            if !pinned || !move_catastrophy(board, id, one) {
                sink.highlight(one, HighlightKind::Move);
            }
            if y == piece.color.pawn_rank() {
                if let Ok(two) = move_square(piece.square, 0, 2 * forward) {
                    if board.piece_at(two).is_none()
                        && (!pinned || !move_catastrophy(board, id, two))
                    {
                        sink.highlight(two, HighlightKind::Move);
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for side in [-1, 1] {
        if let Ok(diagonal) = move_square(piece.square, side, forward) {
            if let Some(occupant) = board.piece_at(diagonal) {
                if piece.is_opponent(board.piece(occupant))
                    && (!pinned || !move_catastrophy(board, id, diagonal))
                {
                    sink.highlight(diagonal, HighlightKind::Capture);
                }
            }
        }
    }

    // En passant: only offered from the rank a double advance can land
    // beside, against a pawn that just made one.
    let passing_rank = match piece.color {
        Color::Light => 4,
        Color::Dark => 3,
    };
    if y == passing_rank {
        if let Some(last) = board.last_move() {
            if last.kind == PieceKind::Pawn
                && (last.from.1 - last.to.1).abs() == 2
                && (x - last.from.0).abs() == 1
            {
                let landing = (last.from.0, last.to.1 + forward);
                if !pinned || !move_catastrophy(board, id, landing) {
                    sink.highlight(landing, HighlightKind::Capture);
                }
            }
        }
    }
}
