//! Standalone rated self-play runner.
//!
//! Plays one game between two engine instances whose difficulty comes from
//! the persisted ratings, then applies the result to both ratings and
//! appends it to the log.
//!
//! Run with:
//! `cargo run --release --bin rated_match`
//! `cargo run --release --bin rated_match -- --verbose`
//! `cargo run --release --bin rated_match -- e2e4 e7e5`
//!
//! Bare arguments are coordinate moves applied as a scripted opening before
//! the engines take over.

use sparring_chess::board_location::notation_to_location;
use sparring_chess::board_state::{BoardState, GameStatus};
use sparring_chess::engines::search_engine::SearchEngine;
use sparring_chess::piece_types::PieceTeam;
use sparring_chess::rating::{apply_game_result, GameResult};
use sparring_chess::rating_store::RatingStore;

const RATINGS_FILE: &str = "ratings.json";
const MAX_PLIES: usize = 200;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let store = RatingStore::new(RATINGS_FILE);
    let (mut white, mut black) = store.load();
    println!(
        "White ({}) vs Black ({})",
        white.rounded(),
        black.rounded()
    );

    let mut state = BoardState::new_game();
    for notation in std::env::args().skip(1).filter(|a| !a.starts_with('-')) {
        apply_opening_move(&mut state, &notation)?;
        println!("  opening {}", notation);
    }

    let mut engine = SearchEngine::from_entropy();

    let mut white_result = None;
    for ply in 0..MAX_PLIES {
        let legal = state.get_legal_moves();
        match state.status {
            GameStatus::Checkmate => {
                // The side to move has no escape; the side that just moved wins.
                let loser = state.turn;
                println!("checkmate, {:?} loses", loser);
                white_result = Some(if loser == PieceTeam::Light {
                    GameResult::Loss
                } else {
                    GameResult::Win
                });
                break;
            }
            GameStatus::Stalemate => {
                println!("stalemate");
                white_result = Some(GameResult::Draw);
                break;
            }
            GameStatus::Ongoing => {}
        }

        let rating = match state.turn {
            PieceTeam::Light => white.rounded(),
            PieceTeam::Dark => black.rounded(),
        };
        let mv = engine
            .pick_best_move(&mut state, &legal, rating)
            .ok_or_else(|| "engine returned no move for a live position".to_string())?;
        println!("{:>3}. {}", ply + 1, mv.to_notation());
        state.make_move(&mv, false);

        if verbose {
            println!("{}", render_board(&state));
        }
    }

    // Undecided at the ply cap counts as a draw.
    let white_result = white_result.unwrap_or(GameResult::Draw);

    apply_game_result(&mut white, &mut black, white_result);
    store
        .save(&white, &black, "White", "Black")
        .map_err(|e| format!("{:?}", e))?;
    println!(
        "New ratings - White: {}, Black: {}",
        white.rounded(),
        black.rounded()
    );
    Ok(())
}

fn apply_opening_move(state: &mut BoardState, notation: &str) -> Result<(), String> {
    if notation.len() != 4 || !notation.is_ascii() {
        return Err(format!("bad opening move {:?}", notation));
    }
    let start = notation_to_location(&notation[..2]).map_err(|e| format!("{:?}", e))?;
    let stop = notation_to_location(&notation[2..]).map_err(|e| format!("{:?}", e))?;
    let legal = state.get_legal_moves();
    let mv = legal
        .iter()
        .find(|mv| mv.start == start && mv.stop == stop)
        .ok_or_else(|| format!("opening move {} is not legal here", notation))?
        .clone();
    state.make_move(&mv, false);
    Ok(())
}

fn render_board(state: &BoardState) -> String {
    state
        .snapshot()
        .iter()
        .map(|row| row.join(" "))
        .collect::<Vec<String>>()
        .join("\n")
}
