//! Arena of pieces with stable identifiers.
//!
//! Squares and rosters refer to pieces by `PieceId` rather than holding them
//! directly, so a capture frees exactly one slot and every other reference
//! stays valid. Slots are never reused: a captured piece's id stays dead for
//! the rest of the game.

use crate::board::piece::Piece;
use crate::errors::{ChessError, ChessResult};

pub type PieceId = usize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieceArena {
    slots: Vec<Option<Piece>>,
}

impl PieceArena {
    pub fn new() -> Self {
        PieceArena { slots: Vec::new() }
    }

    /// Adds a piece and returns its id, valid until the piece is removed.
    pub fn insert(&mut self, piece: Piece) -> PieceId {
        let id = self.slots.len();
        self.slots.push(Some(piece));
        id
    }

    pub fn view_piece(&self, id: PieceId) -> ChessResult<&Piece> {
        self.slots
            .get(id)
            .and_then(|slot| slot.as_ref())
            .ok_or(ChessError::MissingPiece(id))
    }

    pub fn edit_piece(&mut self, id: PieceId) -> ChessResult<&mut Piece> {
        self.slots
            .get_mut(id)
            .and_then(|slot| slot.as_mut())
            .ok_or(ChessError::MissingPiece(id))
    }

    /// Frees the slot and returns the removed piece.
    pub fn remove_piece(&mut self, id: PieceId) -> ChessResult<Piece> {
        self.slots
            .get_mut(id)
            .and_then(|slot| slot.take())
            .ok_or(ChessError::MissingPiece(id))
    }

    #[inline]
    pub fn contains(&self, id: PieceId) -> bool {
        matches!(self.slots.get(id), Some(Some(_)))
    }

    pub fn live_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|piece| (id, piece)))
    }
}
