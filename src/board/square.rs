//! Board coordinates and line geometry helpers.
//!
//! A square is an `(x, y)` pair with both axes in `0..=7`; `x` counts files
//! left to right and `y` counts ranks from the light side of the board. The
//! walkers and movement laws assume their inputs are already on the board and
//! rely on `move_square` (or explicit range checks) at every enumeration
//! boundary.

use crate::errors::ChessError;

pub type Square = (i8, i8);

/// Moves a square by a file and rank offset, rejecting results off the board.
pub fn move_square(x: Square, d_file: i8, d_rank: i8) -> Result<Square, ChessError> {
    let y: Square = (x.0 + d_file, x.1 + d_rank);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessError::OutOfBounds(y.0, y.1))
    } else {
        Ok(y)
    }
}

#[inline]
pub fn on_board(x: Square) -> bool {
    (x.0 >= 0) & (x.0 <= 7) & (x.1 >= 0) & (x.1 <= 7)
}

/// True when the two squares share exactly one axis, i.e. a rook line.
#[inline]
pub fn is_straight_line(from: Square, to: Square) -> bool {
    let d_file = (to.0 - from.0).abs();
    let d_rank = (to.1 - from.1).abs();
    (d_file == 0 && d_rank > 0) || (d_file > 0 && d_rank == 0)
}

/// True when the two squares lie on a 45-degree diagonal, i.e. a bishop line.
#[inline]
pub fn is_diagonal_line(from: Square, to: Square) -> bool {
    let d_file = (to.0 - from.0).abs();
    let d_rank = (to.1 - from.1).abs();
    d_file > 0 && d_file == d_rank
}

/// Chebyshev distance between two squares, the king's step metric.
#[inline]
pub fn chebyshev(a: Square, b: Square) -> i8 {
    let d_file = (a.0 - b.0).abs();
    let d_rank = (a.1 - b.1).abs();
    if d_file > d_rank {
        d_file
    } else {
        d_rank
    }
}
