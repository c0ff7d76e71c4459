//! Scoring utilities for the search engine.
//!
//! Scores are modeled as floating point values so the rating-scaled
//! evaluation noise can be fractional. Positive scores favor the Light side;
//! negative scores favor the Dark side.

use crate::board_state::BoardGrid;
use crate::piece_types::{PieceClass, PieceTeam};

/// Numeric representation of an evaluation score.
pub type Score = f32;

/// Initial alpha/beta window bound. Large enough to dominate any material
/// total; the search never assigns distinct mate scores, so no sentinel
/// beyond this is needed.
pub const SCORE_BOUND: Score = 10_000.0;

/// Conventional material value for a given piece class.
///
/// Kings are worth zero: both sides always have exactly one, so the king
/// contributes nothing to the material balance.
pub fn material_value(x: &PieceClass) -> Score {
    match x {
        PieceClass::Pawn => 1.0,
        PieceClass::Knight => 3.0,
        PieceClass::Bishop => 3.0,
        PieceClass::Rook => 5.0,
        PieceClass::Queen => 9.0,
        PieceClass::King => 0.0,
    }
}

/// Signed material sum over all occupied squares: Light pieces add their
/// value, Dark pieces subtract it.
pub fn material_balance(grid: &BoardGrid) -> Score {
    let mut score = 0.0;
    for row in grid {
        for square in row {
            if let Some(piece) = square {
                let value = material_value(&piece.class);
                match piece.team {
                    PieceTeam::Light => score += value,
                    PieceTeam::Dark => score -= value,
                }
            }
        }
    }
    score
}
