//! Rook movement law.

use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::square::{is_straight_line, Square};
use crate::rules::can_move::destination_open;

/// A straight line with nothing in between. The ignored piece may stand on
/// the destination, but never mid-path: a rook does not see through its own
/// line the way the queen's law does.
pub fn can_move(board: &Board, id: PieceId, to: Square, ignore: Option<PieceId>) -> bool {
    let from = board.piece(id).square;
    if is_straight_line(from, to) && destination_open(board, id, to, ignore) {
        return board.route_blocked(id, to).is_none();
    }
    false
}
