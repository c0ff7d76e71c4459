//! Crate root module declarations for the Sparring Chess engine project.
//!
//! This file exposes all top-level subsystems (board state, per-piece move
//! generation, scoring, the skill-adaptive search engine, and the Elo rating
//! model) so binaries, tests, and external tooling can import stable module
//! paths.

pub mod board_location;
pub mod board_state;
pub mod castle_rights;
pub mod chess_move;
pub mod errors;
pub mod piece_record;
pub mod piece_types;
pub mod scoring;

pub mod moves {
    pub mod castling;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod engines {
    pub mod search_engine;
    pub mod skill_profile;
}

pub mod rating;
pub mod rating_store;
