use std::io::{self, BufRead, Write};

use quince_chess::analysis::check::under_check;
use quince_chess::game::{ClickOutcome, Game};
use quince_chess::highlights::highlight::HighlightKind;
use quince_chess::utils::render_board::render_board;

const BOARD_SIZE: i32 = 600;

/// Console front end: every input line is one click on a board square,
/// given as `file rank`. Selecting a piece prints its highlighted
/// destinations; clicking one of them plays the move.
fn main() {
    env_logger::init();

    let mut game = Game::new(BOARD_SIZE);
    println!("{}", render_board(game.board()));
    println!("Click squares as `file rank` (0-7 each). `reset` restarts, `quit` exits.");

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    loop {
        prompt(&game);
        input.clear();
        match stdin_lock.read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = input.trim();
        match line {
            "" => continue,
            "quit" => break,
            "reset" => {
                game = Game::new(BOARD_SIZE);
                println!("{}", render_board(game.board()));
                continue;
            }
            _ => {}
        }

        let square = match parse_square(line) {
            Some(square) => square,
            None => {
                println!("Could not read a square from {line:?}.");
                continue;
            }
        };

        let mut flags: Vec<((i8, i8), HighlightKind)> = Vec::new();
        match game.click(square, &mut flags) {
            ClickOutcome::Ignored => println!("Nothing to do on {square:?}."),
            ClickOutcome::Selected(_) => {
                for (flagged, kind) in &flags {
                    println!("  {} {flagged:?}", kind_label(*kind));
                }
            }
            ClickOutcome::Deselected => println!("Selection dropped."),
            ClickOutcome::Moved { from, to, .. } => {
                println!("{}", render_board(game.board()));
                println!("Played {from:?} -> {to:?}.");
                if under_check(game.board(), game.board().turn_color()) {
                    println!("Check!");
                }
            }
        }
    }
}

fn prompt(game: &Game) {
    let side = if game.board().dark_turn() { "dark" } else { "light" };
    print!("{side}> ");
    io::stdout().flush().ok();
}

fn parse_square(line: &str) -> Option<(i8, i8)> {
    let mut parts = line.split_whitespace();
    let file = parts.next()?.parse::<i8>().ok()?;
    let rank = parts.next()?.parse::<i8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((file, rank))
}

fn kind_label(kind: HighlightKind) -> &'static str {
    match kind {
        HighlightKind::PieceSelected => "selected",
        HighlightKind::Move => "move to",
        HighlightKind::Capture => "capture on",
        HighlightKind::Castling => "castle to",
    }
}
