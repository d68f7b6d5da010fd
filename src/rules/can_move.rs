//! Movement-law dispatch: `can_move` is the single legality predicate for a
//! piece reaching a destination square.
//!
//! The optional `ignore` piece is treated as transparent for capture checks,
//! which lets the analysis layer ask "could this piece also reach here if
//! some other piece did not exist" without mutating the board. Each variant
//! decides for itself how far that transparency extends along its path.

use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::piece::PieceKind;
use crate::board::square::{on_board, Square};
use crate::rules::{
    bishop_rules, king_rules, knight_rules, pawn_rules, queen_rules, rook_rules,
};

/// True when the piece's movement law admits the destination. Contains no
/// turn or check filtering; those live with the callers.
pub fn can_move(board: &Board, id: PieceId, to: Square, ignore: Option<PieceId>) -> bool {
    if !on_board(to) {
        return false;
    }
    match board.piece(id).kind {
        PieceKind::Pawn => pawn_rules::can_move(board, id, to, ignore),
        PieceKind::Knight => knight_rules::can_move(board, id, to, ignore),
        PieceKind::Bishop => bishop_rules::can_move(board, id, to, ignore),
        PieceKind::Rook => rook_rules::can_move(board, id, to, ignore),
        PieceKind::Queen => queen_rules::can_move(board, id, to, ignore),
        PieceKind::King => king_rules::can_move(board, id, to, ignore),
    }
}

/// Shared destination gate: empty, holds an opponent, or holds the ignored
/// piece.
pub(crate) fn destination_open(
    board: &Board,
    mover: PieceId,
    to: Square,
    ignore: Option<PieceId>,
) -> bool {
    match board.piece_at(to) {
        None => true,
        Some(occupant) => {
            board.piece(mover).is_opponent(board.piece(occupant)) || ignore == Some(occupant)
        }
    }
}

/// Whether any ally could move onto this piece's own square if it were not
/// there. A covered opponent cannot be captured by a king.
pub fn is_covered(board: &Board, id: PieceId) -> bool {
    let piece = board.piece(id);
    board
        .roster(piece.color)
        .iter()
        .any(|&ally| can_move(board, ally, piece.square, Some(id)))
}

/// Whether `attacker` could move onto `target`'s square right now.
pub fn can_attack(board: &Board, attacker: PieceId, target: PieceId) -> bool {
    can_move(board, attacker, board.piece(target).square, None)
}
