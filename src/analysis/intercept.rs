//! Intercept geometry for breaking a check.

use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::square::{is_straight_line, Square};

/// The squares strictly between an attacker and the king it attacks, ordered
/// from the attacker's side. Straight attacks walk the shared rank or file;
/// every other attack steps both axes at once and stops as soon as either
/// axis arrives. A knight or an adjacent pawn therefore yields no squares at
/// all: capturing such an attacker is the only non-king answer.
pub fn intercept_squares(board: &Board, attacker: PieceId, king_square: Square) -> Vec<Square> {
    let from = board.piece(attacker).square;
    let mut squares = Vec::new();

    if is_straight_line(from, king_square) {
        if (from.0 - king_square.0).abs() > 0 {
            let step = if king_square.0 < from.0 { -1 } else { 1 };
            let mut file = from.0 + step;
            while file != king_square.0 {
                squares.push((file, king_square.1));
                file += step;
            }
        } else {
            let step = if king_square.1 < from.1 { -1 } else { 1 };
            let mut rank = from.1 + step;
            while rank != king_square.1 {
                squares.push((king_square.0, rank));
                rank += step;
            }
        }
    } else {
        let file_step = if king_square.0 < from.0 { -1 } else { 1 };
        let rank_step = if king_square.1 < from.1 { -1 } else { 1 };
        let mut file = from.0 + file_step;
        let mut rank = from.1 + rank_step;
        while file != king_square.0 && rank != king_square.1 {
            squares.push((file, rank));
            file += file_step;
            rank += rank_step;
        }
    }
    squares
}
