//! Knight movement law.

use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::square::Square;
use crate::rules::can_move::destination_open;

/// One L-shaped jump in any sign combination. Blocking pieces are ignored
/// entirely; only the destination occupant matters.
pub fn can_move(board: &Board, id: PieceId, to: Square, ignore: Option<PieceId>) -> bool {
    let from = board.piece(id).square;
    let d_file = (to.0 - from.0).abs();
    let d_rank = (to.1 - from.1).abs();
    if (d_rank == 2 && d_file == 1) || (d_file == 2 && d_rank == 1) {
        destination_open(board, id, to, ignore)
    } else {
        false
    }
}
