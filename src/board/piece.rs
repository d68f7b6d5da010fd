//! Piece values: color, kind, sprite handle, and the piece record itself.

use std::fmt;

use crate::board::square::Square;

/// Side a piece plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank direction this color's pawns advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Starting rank of this color's pawns.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Rank the major pieces start on.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

/// Opaque visual-asset handle handed to the render collaborator.
///
/// The engine assigns one per piece at creation and never reads it back;
/// only the collaborator maps it to an actual texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteId(pub u8);

impl SpriteId {
    pub const fn new(color: Color, kind: PieceKind, alternate: bool) -> Self {
        let base = (color.index() * 6 + kind.index()) as u8;
        if alternate {
            SpriteId(base | 0x10)
        } else {
            SpriteId(base)
        }
    }
}

/// A live piece. Owned by the board's arena for its entire lifetime; the
/// stored square is kept in sync with the grid by `Board::move_piece`, the
/// single mutator of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
    pub sprite: SpriteId,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        // Each side's second knight carries its own sprite flavor.
        let alternate = matches!(kind, PieceKind::Knight) && square.0 != 1;
        Piece {
            kind,
            color,
            square,
            has_moved: false,
            sprite: SpriteId::new(color, kind, alternate),
        }
    }

    #[inline]
    pub fn is_opponent(&self, other: &Piece) -> bool {
        self.color.index() != other.color.index()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Piece: Type: {}, Position: ({}, {}), Color: {:?}",
            self.kind.name(),
            self.square.0,
            self.square.1,
            self.color
        )
    }
}
