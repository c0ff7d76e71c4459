use crate::errors::Errors;
use crate::piece_types::{PieceClass, PieceTeam};

/// Represents a chess piece with its class and team.
/// Used to store information about a piece occupying a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// Piece team
    pub team: PieceTeam,
}

/// Contents of one square: either empty or an occupying piece.
pub type SquareCode = Option<PieceRecord>;

/// The snapshot marker for an empty square.
pub const EMPTY_SQUARE_CODE: &str = "--";

impl PieceRecord {
    pub fn new(team: PieceTeam, class: PieceClass) -> Self {
        PieceRecord { class, team }
    }

    /// Two-character color+piece code used by board snapshots, e.g. "wK", "bp".
    pub fn code(&self) -> &'static str {
        match (self.team, self.class) {
            (PieceTeam::Light, PieceClass::King) => "wK",
            (PieceTeam::Light, PieceClass::Queen) => "wQ",
            (PieceTeam::Light, PieceClass::Rook) => "wR",
            (PieceTeam::Light, PieceClass::Bishop) => "wB",
            (PieceTeam::Light, PieceClass::Knight) => "wN",
            (PieceTeam::Light, PieceClass::Pawn) => "wp",
            (PieceTeam::Dark, PieceClass::King) => "bK",
            (PieceTeam::Dark, PieceClass::Queen) => "bQ",
            (PieceTeam::Dark, PieceClass::Rook) => "bR",
            (PieceTeam::Dark, PieceClass::Bishop) => "bB",
            (PieceTeam::Dark, PieceClass::Knight) => "bN",
            (PieceTeam::Dark, PieceClass::Pawn) => "bp",
        }
    }

    /// Parses a square code back into its occupant. `"--"` parses to `None`.
    pub fn from_code(code: &str) -> Result<SquareCode, Errors> {
        if code == EMPTY_SQUARE_CODE {
            return Ok(None);
        }
        let team = match code.as_bytes().first() {
            Some(b'w') => PieceTeam::Light,
            Some(b'b') => PieceTeam::Dark,
            _ => return Err(Errors::InvalidSquareCode(code.to_string())),
        };
        let class = match code.as_bytes().get(1) {
            Some(b'K') => PieceClass::King,
            Some(b'Q') => PieceClass::Queen,
            Some(b'R') => PieceClass::Rook,
            Some(b'B') => PieceClass::Bishop,
            Some(b'N') => PieceClass::Knight,
            Some(b'p') => PieceClass::Pawn,
            _ => return Err(Errors::InvalidSquareCode(code.to_string())),
        };
        if code.len() != 2 {
            return Err(Errors::InvalidSquareCode(code.to_string()));
        }
        Ok(Some(PieceRecord { class, team }))
    }
}
