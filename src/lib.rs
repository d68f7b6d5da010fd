//! Crate root module declarations for the Quince Chess rule engine.
//!
//! This file exposes all top-level subsystems (board state, per-piece
//! movement rules, check and pin analysis, highlight generation, and utility
//! helpers) so binaries, tests, and external tooling can import stable
//! module paths.

pub mod errors;
pub mod game;

pub mod board {
    pub mod arena;
    pub mod board;
    pub mod layout;
    pub mod piece;
    pub mod square;
}

pub mod rules {
    pub mod bishop_rules;
    pub mod can_move;
    pub mod king_rules;
    pub mod knight_rules;
    pub mod pawn_rules;
    pub mod queen_rules;
    pub mod rook_rules;
}

pub mod analysis {
    pub mod check;
    pub mod intercept;
    pub mod pins;
}

pub mod highlights {
    pub mod highlight;
    pub mod king_routes;
    pub mod knight_routes;
    pub mod pawn_routes;
    pub mod routes;
    pub mod sliding_routes;
}

pub mod utils {
    pub mod render_board;
}
