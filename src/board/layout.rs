//! Pixel geometry handed to the render collaborator, plus the standard
//! starting-rank table.
//!
//! The engine never interprets pixels itself; it only owns the constants so
//! every front end draws the same board.

use crate::board::piece::PieceKind;

/// Major piece order along each color's back rank, file 0 through 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board margin and cell size derived from the total board edge length.
///
/// The pad is kept fractional internally; the accessor truncates, matching
/// what the drawing code consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    size: i32,
    pad: f32,
    grid: i32,
}

impl BoardLayout {
    pub fn new(board_size: i32) -> Self {
        let pad = (board_size as f32 * 3.125).ceil() / 100.0;
        let grid = ((board_size as f32 - pad * 2.0) / 8.0) as i32;
        BoardLayout {
            size: board_size,
            pad,
            grid,
        }
    }

    #[inline]
    pub fn board_size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn board_pad(&self) -> i32 {
        self.pad as i32
    }

    #[inline]
    pub fn grid_size(&self) -> i32 {
        self.grid
    }
}
