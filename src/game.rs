//! Turn-taking and piece selection on top of the board.
//!
//! A game owns the board plus the one piece the player currently has
//! selected. Clicks arrive as board squares; every highlight the selection
//! produces is pushed into the caller's sink, so the front end only draws
//! what it is told.

use log::debug;

use crate::analysis::check::{recompute_check, under_check};
use crate::analysis::pins::{is_piece_pinned, move_catastrophy};
use crate::board::arena::PieceId;
use crate::board::board::Board;
use crate::board::piece::PieceKind;
use crate::board::square::{on_board, Square};
use crate::highlights::highlight::{HighlightKind, HighlightSink};
use crate::highlights::king_routes::highlight_king_evade;
use crate::highlights::routes::{highlight_intercept_route, highlight_routes};
use crate::rules::can_move::can_move;

/// What a click did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed: empty click, off-turn piece, or an illegal move.
    Ignored,
    /// A piece of the side to move was selected.
    Selected(PieceId),
    /// The active piece was clicked again and dropped.
    Deselected,
    /// The active piece moved.
    Moved {
        piece: PieceId,
        from: Square,
        to: Square,
    },
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active_piece: Option<PieceId>,
}

impl Game {
    pub fn new(board_size: i32) -> Self {
        Game {
            board: Board::new(board_size),
            active_piece: None,
        }
    }

    /// Wraps an already arranged board, as the tests and harnesses do.
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            active_piece: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_piece(&self) -> Option<PieceId> {
        self.active_piece
    }

    /// Handles one click on a board square. Selecting a piece of the side to
    /// move flags its destinations into `sink`; clicking the selection again
    /// drops it; clicking a destination attempts the move.
    pub fn click(&mut self, square: Square, sink: &mut impl HighlightSink) -> ClickOutcome {
        if !on_board(square) {
            return ClickOutcome::Ignored;
        }
        match (self.board.piece_at(square), self.active_piece) {
            (Some(clicked), None) => {
                if !self.board.is_piece_turn(clicked) {
                    return ClickOutcome::Ignored;
                }
                self.active_piece = Some(clicked);
                self.flag_selection(clicked, sink);
                ClickOutcome::Selected(clicked)
            }
            (Some(clicked), Some(active)) if clicked == active => {
                self.active_piece = None;
                ClickOutcome::Deselected
            }
            (_, Some(active)) => {
                let from = self.board.piece(active).square;
                if self.attempt_move(active, square) {
                    self.active_piece = None;
                    ClickOutcome::Moved {
                        piece: active,
                        from,
                        to: square,
                    }
                } else {
                    ClickOutcome::Ignored
                }
            }
            (None, None) => ClickOutcome::Ignored,
        }
    }

    /// Applies the move if it is legal in full: the piece is on turn, its
    /// movement law reaches the square, and the move does not leave its own
    /// king in check. Records the move before applying it so en passant sees
    /// the previous one, then flips the turn and refreshes check for the
    /// side now to move.
    pub fn attempt_move(&mut self, id: PieceId, to: Square) -> bool {
        if !on_board(to) || !self.board.is_piece_turn(id) {
            return false;
        }
        if !can_move(&self.board, id, to, None) {
            return false;
        }
        if move_catastrophy(&self.board, id, to) {
            return false;
        }

        let (kind, from) = {
            let piece = self.board.piece(id);
            (piece.kind, piece.square)
        };
        self.board.set_last_move(kind, from, to);
        self.board.move_piece(id, to);
        self.board.flip_turn();
        recompute_check(&mut self.board, None);
        debug!("played {kind:?} {from:?} -> {to:?}");
        true
    }

    /// Flags the selected piece's square and destination set. A checked side
    /// sees only answers to the check: the king its evade squares, everyone
    /// else their intercept route.
    fn flag_selection(&self, id: PieceId, sink: &mut impl HighlightSink) {
        let piece = self.board.piece(id);
        sink.highlight(piece.square, HighlightKind::PieceSelected);

        if under_check(&self.board, piece.color) {
            if piece.kind == PieceKind::King {
                highlight_king_evade(&self.board, sink);
            } else {
                highlight_intercept_route(&self.board, id, sink);
            }
        } else {
            let pinned = is_piece_pinned(&self.board, id);
            highlight_routes(&self.board, id, pinned, sink);
        }
    }
}
