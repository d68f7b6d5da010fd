//! Check detection and square safety.
//!
//! `recompute_check` refreshes the stored check state for the side to move
//! only; the off-turn king's state keeps its last computed value until the
//! turn comes back around. Square safety is asked from the perspective of a
//! scouting piece that is assumed to vacate its own square.

use log::info;

use crate::board::arena::PieceId;
use crate::board::board::{Board, CheckState};
use crate::board::piece::{Color, PieceKind};
use crate::board::square::{chebyshev, Square};
use crate::rules::can_move::can_move;

/// True iff no opposing piece threatens the square. An occupied square is
/// never safe: the caller is the piece considering moving there, not staying.
pub fn is_safe(board: &Board, scout: PieceId, square: Square) -> bool {
    if board.piece_at(square).is_some() {
        return false;
    }
    let color = board.piece(scout).color;
    for &foe_id in board.roster(color.opposite()) {
        let foe = board.piece(foe_id);
        match foe.kind {
            // Pawns threaten their capture diagonals, not the squares they
            // advance onto.
            PieceKind::Pawn => {
                if (square.0 - foe.square.0).abs() == 1 && (square.1 - foe.square.1).abs() == 1 {
                    return false;
                }
            }
            // Probing the opposing king through its own movement law would
            // recurse straight back into this function.
            PieceKind::King => {
                if chebyshev(square, foe.square) <= 1 {
                    return false;
                }
            }
            _ => {
                if can_move(board, foe_id, square, Some(scout)) {
                    return false;
                }
            }
        }
    }
    true
}

/// Rescans the opposing roster for an attacker on the on-turn king, skipping
/// `ignore` and the opposing king itself. The first piece whose movement law
/// reaches the king's square is recorded as the attacker; later ones are not
/// tracked.
pub fn recompute_check(board: &mut Board, ignore: Option<PieceId>) {
    let color = board.turn_color();
    let king_square = board.piece(board.king(color)).square;
    let previous = board.check_state(color);

    let mut next = CheckState::default();
    for &foe_id in board.roster(color.opposite()) {
        if Some(foe_id) == ignore || board.piece(foe_id).kind == PieceKind::King {
            continue;
        }
        if can_move(board, foe_id, king_square, None) {
            next = CheckState {
                in_check: true,
                attacker: Some(foe_id),
            };
            break;
        }
    }

    if next.in_check != previous.in_check {
        match next.attacker {
            Some(attacker) => info!("{color:?} king is checked by {}", board.piece(attacker)),
            None => info!("{color:?} king is out of check"),
        }
    }
    board.set_check_state(color, next);
}

/// Whether this color's king is currently flagged as checked.
pub fn under_check(board: &Board, color: Color) -> bool {
    board.check_state(color).in_check
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings_only_board() -> Board {
        let mut board = Board::empty(600);
        board.place(PieceKind::King, Color::Light, (4, 0)).unwrap();
        board.place(PieceKind::King, Color::Dark, (4, 7)).unwrap();
        board
    }

    #[test]
    fn rook_on_the_rank_sets_and_clears_check() {
        let mut dut = kings_only_board();
        let rook = dut.place(PieceKind::Rook, Color::Dark, (0, 0)).unwrap();

        recompute_check(&mut dut, None);
        assert!(under_check(&dut, Color::Light));
        assert_eq!(dut.check_state(Color::Light).attacker, Some(rook));

        dut.move_piece(rook, (0, 5));
        recompute_check(&mut dut, None);
        assert!(!under_check(&dut, Color::Light));
        assert_eq!(dut.check_state(Color::Light).attacker, None);
    }

    #[test]
    fn first_roster_match_wins_the_attacker_slot() {
        let mut dut = kings_only_board();
        let rook = dut.place(PieceKind::Rook, Color::Dark, (4, 5)).unwrap();
        dut.place(PieceKind::Queen, Color::Dark, (0, 4)).unwrap();

        recompute_check(&mut dut, None);
        assert_eq!(dut.check_state(Color::Light).attacker, Some(rook));
    }

    #[test]
    fn ignored_attacker_is_invisible_to_the_scan() {
        let mut dut = kings_only_board();
        let rook = dut.place(PieceKind::Rook, Color::Dark, (4, 5)).unwrap();
        recompute_check(&mut dut, Some(rook));
        assert!(!under_check(&dut, Color::Light));
    }

    #[test]
    fn recompute_serves_only_the_side_to_move() {
        let mut dut = kings_only_board();
        dut.place(PieceKind::Rook, Color::Light, (4, 5)).unwrap();

        // Light to move: the dark king's state is not refreshed.
        recompute_check(&mut dut, None);
        assert!(!under_check(&dut, Color::Dark));

        dut.flip_turn();
        recompute_check(&mut dut, None);
        assert!(under_check(&dut, Color::Dark));
    }

    #[test]
    fn occupied_squares_are_never_safe() {
        let mut dut = kings_only_board();
        let king = dut.king(Color::Light);
        dut.place(PieceKind::Pawn, Color::Light, (3, 0)).unwrap();
        assert!(!is_safe(&dut, king, (3, 0)));
        assert!(is_safe(&dut, king, (3, 1)));
    }

    #[test]
    fn pawn_threat_covers_all_four_diagonals() {
        let mut dut = kings_only_board();
        let king = dut.king(Color::Light);
        dut.place(PieceKind::Pawn, Color::Dark, (3, 3)).unwrap();

        for corner in [(2, 2), (4, 2), (2, 4), (4, 4)] {
            assert!(!is_safe(&dut, king, corner), "{corner:?} should be threatened");
        }
        // The advance square directly ahead is not a threat.
        assert!(is_safe(&dut, king, (3, 2)));
    }

    #[test]
    fn opposing_king_repels_by_adjacency() {
        let dut = kings_only_board();
        let king = dut.king(Color::Light);
        assert!(!is_safe(&dut, king, (4, 6)));
        assert!(!is_safe(&dut, king, (3, 6)));
        assert!(is_safe(&dut, king, (4, 5)));
    }

    #[test]
    fn only_queen_foes_see_through_the_scout() {
        let mut dut = kings_only_board();
        let scout = dut.place(PieceKind::Rook, Color::Light, (0, 3)).unwrap();
        dut.place(PieceKind::Rook, Color::Dark, (0, 7)).unwrap();
        // The rook's law never excuses a mid-path blocker, scout included.
        assert!(is_safe(&dut, scout, (0, 1)));

        let mut queenside = kings_only_board();
        let scout2 = queenside
            .place(PieceKind::Rook, Color::Light, (0, 3))
            .unwrap();
        queenside.place(PieceKind::Queen, Color::Dark, (0, 7)).unwrap();
        assert!(!is_safe(&queenside, scout2, (0, 1)));
    }
}
