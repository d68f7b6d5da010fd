//! King movement law: single steps and castling.

use crate::analysis::check::{is_safe, under_check};
use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::piece::PieceKind;
use crate::board::square::{chebyshev, Square};
use crate::rules::can_move::is_covered;

/// One square in any direction onto an empty safe square, an unprotected
/// opponent, or the ignored piece. A two-square horizontal move is castling:
/// the king and the matching corner rook must both be unmoved, every square
/// between them empty, the king not currently in check, and the crossed and
/// landing squares free of attack.
pub fn can_move(board: &Board, id: PieceId, to: Square, ignore: Option<PieceId>) -> bool {
    let piece = board.piece(id);
    let from = piece.square;

    if chebyshev(from, to) <= 1 {
        return match board.piece_at(to) {
            None => is_safe(board, id, to),
            Some(occupant) if ignore == Some(occupant) => true,
            Some(occupant) if piece.is_opponent(board.piece(occupant)) => {
                !is_covered(board, occupant)
            }
            Some(_) => false,
        };
    }

    let rank = piece.color.back_rank();
    if piece.has_moved || from != (4, rank) || to.1 != rank || (to.0 - from.0).abs() != 2 {
        return false;
    }
    if under_check(board, piece.color) {
        return false;
    }
    let right = to.0 > from.0;
    let corner: Square = (if right { 7 } else { 0 }, rank);
    let rook_id = match board.piece_at(corner) {
        Some(rook_id) => rook_id,
        None => return false,
    };
    let rook = board.piece(rook_id);
    if rook.kind != PieceKind::Rook || rook.color != piece.color || rook.has_moved {
        return false;
    }
    let between: &[i8] = if right { &[5, 6] } else { &[1, 2, 3] };
    if between
        .iter()
        .any(|&file| board.piece_at((file, rank)).is_some())
    {
        return false;
    }
    let transit: &[i8] = if right { &[5, 6] } else { &[3, 2] };
    transit.iter().all(|&file| is_safe(board, id, (file, rank)))
}
