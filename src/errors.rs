//! Errors used throughout the rule engine.
//!
//! This module defines the canonical error type returned when a caller
//! structurally misuses the engine surface: coordinates off the board,
//! placing onto an occupied square, or addressing a piece that has already
//! been captured. Illegal *moves* are not errors; legality queries answer
//! with plain booleans and a rejected move simply produces no state change.

use thiserror::Error;

use crate::board::arena::PieceId;
use crate::board::square::Square;

/// Unified error type for the rule engine.
///
/// Each variant carries the offending coordinates or piece id so callers can
/// log or display precise diagnostics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinates fell outside the 8x8 board.
    #[error("coordinates ({0}, {1}) are outside the board")]
    OutOfBounds(i8, i8),

    /// Attempted to place a piece onto a square that is already occupied.
    #[error("square {0:?} is already occupied")]
    OccupiedSquare(Square),

    /// The addressed piece was captured earlier, or the id never existed.
    #[error("piece id {0} is not on the board")]
    MissingPiece(PieceId),
}

pub type ChessResult<T> = Result<T, ChessError>;
