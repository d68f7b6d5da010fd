//! Highlight output surface.
//!
//! The engine decides which squares to flag and with what meaning; the
//! collaborator behind [`HighlightSink`] decides how to present them. Tests
//! and the console front end collect flags into a plain `Vec`.

use crate::board::square::Square;

/// What a flagged square means to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// The selected piece's own square.
    PieceSelected,
    /// An empty square the selected piece may move to.
    Move,
    /// A square where the selected piece captures.
    Capture,
    /// A castling destination for the king.
    Castling,
}

/// Receiver for highlight notifications during a selection.
pub trait HighlightSink {
    fn highlight(&mut self, square: Square, kind: HighlightKind);
}

impl HighlightSink for Vec<(Square, HighlightKind)> {
    fn highlight(&mut self, square: Square, kind: HighlightKind) {
        self.push((square, kind));
    }
}
