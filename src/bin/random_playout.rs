//! Random playout soak runner.
//!
//! Plays capped games of uniformly random legal moves against the full rule
//! stack, asserting the board's structural invariants after every applied
//! move. Useful as a quick consistency soak before deeper debugging.
//!
//! Usage:
//! `cargo run --release --bin random_playout`

use rand::prelude::IndexedRandom;
use rand::Rng;
use rand::RngExt;

use quince_chess::analysis::check::under_check;
use quince_chess::board::arena::PieceId;
use quince_chess::game::Game;
use quince_chess::utils::render_board::render_board;

const GAMES: u32 = 20;
const MAX_PLIES: u32 = 200;
const TRIES_PER_PLY: u32 = 400;

#[derive(Debug, Default)]
struct PlayoutStats {
    games: u32,
    plies: u32,
    captures: u32,
    checks: u32,
    stalled: u32,
}

fn main() {
    env_logger::init();

    let mut rng = rand::rng();
    let mut stats = PlayoutStats::default();

    for game_index in 0..GAMES {
        let mut game = Game::new(600);

        for _ in 0..MAX_PLIES {
            let color = game.board().turn_color();
            let before = game.board().roster(color.opposite()).len();

            if !play_random_ply(&mut game, &mut rng) {
                stats.stalled += 1;
                println!(
                    "game {game_index}: no random move landed in {TRIES_PER_PLY} tries\n{}",
                    render_board(game.board())
                );
                break;
            }

            game.board().assert_invariants();
            stats.plies += 1;
            if game.board().roster(color.opposite()).len() < before {
                stats.captures += 1;
            }
            if under_check(game.board(), game.board().turn_color()) {
                stats.checks += 1;
            }
        }
        stats.games += 1;
    }

    println!("{stats:?}");
}

/// Tries random piece/destination pairs until one passes the full legality
/// gate. Returns false if the cap runs out, which usually means the side to
/// move has no legal answer.
fn play_random_ply(game: &mut Game, rng: &mut impl Rng) -> bool {
    let color = game.board().turn_color();
    let roster: Vec<PieceId> = game.board().roster(color).to_vec();

    for _ in 0..TRIES_PER_PLY {
        let id = match roster.as_slice().choose(rng) {
            Some(id) => *id,
            None => return false,
        };
        let to = (rng.random_range(0..8i8), rng.random_range(0..8i8));
        if game.attempt_move(id, to) {
            return true;
        }
    }
    false
}
