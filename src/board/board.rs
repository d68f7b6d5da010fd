//! Board state: the 8x8 grid, per-color rosters, kings, turn flag, and the
//! last applied move.
//!
//! The grid and every roster hold arena ids, never pieces; `move_piece` is the
//! single mutator of position and keeps the dual representation in sync. It
//! performs no legality check of its own. Callers establish legality through
//! the movement laws in `rules::can_move` before applying.

use log::{debug, info};

use crate::board::arena::{PieceArena, PieceId};
use crate::board::layout::{BoardLayout, BACK_RANK};
use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::{on_board, Square};
use crate::errors::{ChessError, ChessResult};

/// Check status of one side's king, refreshed by the check analysis for the
/// side to move after every applied move. Only the first attacker found in
/// roster order is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckState {
    pub in_check: bool,
    pub attacker: Option<PieceId>,
}

/// The most recently applied move, recorded by the driving layer right before
/// application. Consulted by the pawn's en-passant rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: [[Option<PieceId>; 8]; 8],
    arena: PieceArena,
    rosters: [Vec<PieceId>; 2],
    kings: [Option<PieceId>; 2],
    check: [CheckState; 2],
    dark_turn: bool,
    last_move: Option<LastMove>,
    layout: BoardLayout,
}

impl Board {
    /// A board with no pieces, for scenario construction through `place`.
    pub fn empty(board_size: i32) -> Self {
        Board {
            grid: [[None; 8]; 8],
            arena: PieceArena::new(),
            rosters: [Vec::new(), Vec::new()],
            kings: [None, None],
            check: [CheckState::default(); 2],
            dark_turn: false,
            last_move: None,
            layout: BoardLayout::new(board_size),
        }
    }

    /// A board in the standard opening position, light to move.
    pub fn new(board_size: i32) -> Self {
        let mut board = Board::empty(board_size);
        board.init_board();
        board
    }

    /// Resets to the standard 16+16 starting position. Rosters are rebuilt,
    /// the turn flag returns to light, and the last move is cleared. Piece
    /// ids from before the reset are all dead afterwards.
    pub fn init_board(&mut self) {
        *self = Board::empty(self.layout.board_size());
        for color in [Color::Light, Color::Dark] {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                self.seed(kind, color, (file as i8, color.back_rank()));
            }
            for file in 0..8 {
                self.seed(PieceKind::Pawn, color, (file, color.pawn_rank()));
            }
        }
        info!("board reset to the standard opening position");
    }

    fn seed(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        let id = self.arena.insert(Piece::new(kind, color, square));
        self.grid[square.0 as usize][square.1 as usize] = Some(id);
        self.rosters[color.index()].push(id);
        if kind == PieceKind::King {
            self.kings[color.index()] = Some(id);
        }
        id
    }

    /// Adds a piece to a free square. Used by tests and scenario builders;
    /// `init_board` covers the standard game.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> ChessResult<PieceId> {
        if !on_board(square) {
            return Err(ChessError::OutOfBounds(square.0, square.1));
        }
        if self.piece_at(square).is_some() {
            return Err(ChessError::OccupiedSquare(square));
        }
        Ok(self.seed(kind, color, square))
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.grid[square.0 as usize][square.1 as usize]
    }

    /// The piece behind an id. Panics if the id is dead: a dead id reaching
    /// this accessor means a roster or grid entry survived its piece.
    pub fn piece(&self, id: PieceId) -> &Piece {
        match self.arena.view_piece(id) {
            Ok(piece) => piece,
            Err(_) => panic!("piece id {id} is referenced but no longer alive"),
        }
    }

    pub fn view_piece(&self, id: PieceId) -> ChessResult<&Piece> {
        self.arena.view_piece(id)
    }

    fn edit(&mut self, id: PieceId) -> &mut Piece {
        match self.arena.edit_piece(id) {
            Ok(piece) => piece,
            Err(_) => panic!("piece id {id} is referenced but no longer alive"),
        }
    }

    /// This color's king. Panics when absent; every analysis pass is
    /// meaningless without a king reference.
    pub fn king(&self, color: Color) -> PieceId {
        match self.kings[color.index()] {
            Some(id) => id,
            None => panic!("no {color:?} king on the board"),
        }
    }

    #[inline]
    pub fn roster(&self, color: Color) -> &[PieceId] {
        &self.rosters[color.index()]
    }

    #[inline]
    pub fn check_state(&self, color: Color) -> CheckState {
        self.check[color.index()]
    }

    pub(crate) fn set_check_state(&mut self, color: Color, state: CheckState) {
        self.check[color.index()] = state;
    }

    #[inline]
    pub fn dark_turn(&self) -> bool {
        self.dark_turn
    }

    #[inline]
    pub fn turn_color(&self) -> Color {
        if self.dark_turn {
            Color::Dark
        } else {
            Color::Light
        }
    }

    pub fn flip_turn(&mut self) {
        self.dark_turn = !self.dark_turn;
    }

    #[inline]
    pub fn is_piece_turn(&self, id: PieceId) -> bool {
        self.piece(id).color == self.turn_color()
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn set_last_move(&mut self, kind: PieceKind, from: Square, to: Square) {
        self.last_move = Some(LastMove { kind, from, to });
    }

    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[inline]
    pub fn board_pad(&self) -> i32 {
        self.layout.board_pad()
    }

    #[inline]
    pub fn grid_size(&self) -> i32 {
        self.layout.grid_size()
    }

    /// Applies a move. Effects, in order: capture pickup at the destination
    /// (or, for a pawn landing on an empty square, at the square swept behind
    /// the destination), grid and piece-square update, rook relocation on a
    /// two-square king move, has-moved flag update for king and rook, then
    /// roster removal and arena disposal of the captured piece.
    ///
    /// There is no legality check here and no result value; the caller has
    /// already validated the move.
    pub fn move_piece(&mut self, id: PieceId, to: Square) {
        let (from, kind) = {
            let piece = self.piece(id);
            (piece.square, piece.kind)
        };

        let mut captured = self.piece_at(to);
        self.grid[to.0 as usize][to.1 as usize] = Some(id);
        self.edit(id).square = to;
        self.grid[from.0 as usize][from.1 as usize] = None;

        // The piece a pawn captures is not always on its destination square.
        if kind == PieceKind::Pawn && captured.is_none() {
            captured = self.grid[to.0 as usize][from.1 as usize].take();
            if captured.is_some() {
                debug!("en passant sweep clears {:?}", (to.0, from.1));
            }
        }

        if kind == PieceKind::King && (to.0 - from.0).abs() == 2 {
            let right = to.0 > from.0;
            let corner: Square = (if right { 7 } else { 0 }, to.1);
            let rook_id = match self.grid[corner.0 as usize][corner.1 as usize].take() {
                Some(rook_id) => rook_id,
                None => panic!("castling applied with no rook on {corner:?}"),
            };
            let hop: Square = (if right { from.0 + 1 } else { from.0 - 1 }, to.1);
            self.edit(rook_id).square = hop;
            self.grid[hop.0 as usize][hop.1 as usize] = Some(rook_id);
            debug!("castle rook hops from {corner:?} to {hop:?}");
        }

        if matches!(kind, PieceKind::King | PieceKind::Rook) {
            self.edit(id).has_moved = true;
        }

        if let Some(captured_id) = captured {
            let fallen = match self.arena.remove_piece(captured_id) {
                Ok(piece) => piece,
                Err(_) => panic!("captured piece id {captured_id} was not alive"),
            };
            self.rosters[fallen.color.index()].retain(|&entry| entry != captured_id);
            if self.kings[fallen.color.index()] == Some(captured_id) {
                self.kings[fallen.color.index()] = None;
            }
            debug!("captured {fallen}");
        }
    }

    /// First occupied square strictly between `from` and `to` along a rank or
    /// file. The caller guarantees the two squares share an axis.
    pub fn track_straight(&self, from: Square, to: Square) -> Option<PieceId> {
        if (from.0 - to.0).abs() > 0 {
            let left = to.0 < from.0;
            let mut file = if left { from.0 - 1 } else { from.0 + 1 };
            while file != to.0 {
                let blocker = self.piece_at((file, to.1));
                if blocker.is_some() {
                    return blocker;
                }
                file += if left { -1 } else { 1 };
            }
        } else {
            let down = to.1 > from.1;
            let mut rank = if down { from.1 + 1 } else { from.1 - 1 };
            while rank != to.1 {
                let blocker = self.piece_at((to.0, rank));
                if blocker.is_some() {
                    return blocker;
                }
                rank += if down { 1 } else { -1 };
            }
        }
        None
    }

    /// First occupied square strictly between `from` and `to` along a
    /// diagonal. The caller guarantees a 45-degree line.
    pub fn track_diagonal(&self, from: Square, to: Square) -> Option<PieceId> {
        let upper = to.1 < from.1;
        let left = to.0 < from.0;
        let mut file = if left { from.0 - 1 } else { from.0 + 1 };
        let mut rank = if upper { from.1 - 1 } else { from.1 + 1 };
        while file != to.0 && rank != to.1 {
            let blocker = self.piece_at((file, rank));
            if blocker.is_some() {
                return blocker;
            }
            file += if left { -1 } else { 1 };
            rank += if upper { -1 } else { 1 };
        }
        None
    }

    /// Dispatches to the tracker matching the piece's movement shape and
    /// returns the first obstruction toward the destination, if any. Knights
    /// and kings never consult a tracker.
    pub fn route_blocked(&self, id: PieceId, to: Square) -> Option<PieceId> {
        let piece = self.piece(id);
        match piece.kind {
            PieceKind::Pawn => {
                let at_dest = self.piece_at(to);
                let behind = self.piece_at((to.0, to.1 - piece.color.forward()));
                if at_dest.is_some() {
                    at_dest
                } else {
                    behind
                }
            }
            PieceKind::Bishop => self.track_diagonal(piece.square, to),
            PieceKind::Rook => self.track_straight(piece.square, to),
            PieceKind::Queen => {
                let diagonal =
                    (piece.square.0 - to.0).abs() > 0 && (piece.square.1 - to.1).abs() > 0;
                if diagonal {
                    self.track_diagonal(piece.square, to)
                } else {
                    self.track_straight(piece.square, to)
                }
            }
            PieceKind::Knight | PieceKind::King => None,
        }
    }

    /// Clears the piece's grid slot without touching its roster entry. Only
    /// the pin probe uses this, on a clone of the board, so the lifted state
    /// is never observable through the live board.
    pub(crate) fn lift_piece(&mut self, id: PieceId) {
        let square = self.piece(id).square;
        self.grid[square.0 as usize][square.1 as usize] = None;
    }

    /// Fails fast when the grid, rosters, arena, and king references have
    /// drifted apart. Called by the self-play harness after every move.
    pub fn assert_invariants(&self) {
        for file in 0..8i8 {
            for rank in 0..8i8 {
                if let Some(id) = self.piece_at((file, rank)) {
                    let piece = self.piece(id);
                    if piece.square != (file, rank) {
                        panic!(
                            "grid slot ({file}, {rank}) holds {piece} which records square {:?}",
                            piece.square
                        );
                    }
                }
            }
        }
        for color in [Color::Light, Color::Dark] {
            let roster = self.roster(color);
            for (position, &id) in roster.iter().enumerate() {
                let piece = self.piece(id);
                if piece.color != color {
                    panic!("{piece} sits in the {color:?} roster");
                }
                if self.piece_at(piece.square) != Some(id) {
                    panic!("{piece} is not anchored to its grid slot");
                }
                if roster[..position].contains(&id) {
                    panic!("piece id {id} appears twice in the {color:?} roster");
                }
            }
            let king_id = self.king(color);
            if !roster.contains(&king_id) {
                panic!("the {color:?} king is missing from its roster");
            }
        }
        let live = self.arena.live_pieces().count();
        let rostered = self.rosters[0].len() + self.rosters[1].len();
        if live != rostered {
            panic!("arena holds {live} live pieces but the rosters track {rostered}");
        }
    }
}
