//! Pin and self-exposure probes.
//!
//! Both questions are answered on a clone of the board: the hypothetical is
//! realized there, check is recomputed, and the clone is dropped. The live
//! board is never touched, so a probe mid-game cannot disturb state.

use log::trace;

use crate::analysis::check::{recompute_check, under_check};
use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::piece::PieceKind;
use crate::board::square::Square;

/// Whether lifting this piece off its square would leave its own king in
/// check. Kings are never pinned; they are the thing pins protect.
pub fn is_piece_pinned(board: &Board, id: PieceId) -> bool {
    let piece = board.piece(id);
    if piece.kind == PieceKind::King {
        return false;
    }
    let color = piece.color;

    let mut probe = board.clone();
    probe.lift_piece(id);
    recompute_check(&mut probe, None);
    let pinned = under_check(&probe, color);
    trace!("pin probe for {}: {pinned}", piece);
    pinned
}

/// Whether actually playing this move would leave the mover's own king in
/// check. The full move is simulated on the clone, captures included, so a
/// pinned piece sliding along its pin line or capturing its pinner comes
/// back clean.
pub fn move_catastrophy(board: &Board, id: PieceId, to: Square) -> bool {
    let color = board.piece(id).color;

    let mut probe = board.clone();
    probe.move_piece(id, to);
    recompute_check(&mut probe, None);
    let catastrophic = under_check(&probe, color);
    trace!("catastrophy probe to {to:?}: {catastrophic}");
    catastrophic
}
