/// Represents the team (color) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    /// The light (white) side.
    Light,
    /// The dark (black) side.
    Dark,
}

impl PieceTeam {
    /// The opposing team.
    pub fn opponent(&self) -> PieceTeam {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// The board row pawns of this team promote on.
    pub fn promotion_row(&self) -> i8 {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 7,
        }
    }

    /// The board row this team's pieces start on (rook corners live here).
    pub fn back_row(&self) -> i8 {
        match self {
            PieceTeam::Light => 7,
            PieceTeam::Dark => 0,
        }
    }

    /// The board row pawns of this team start on.
    pub fn pawn_home_row(&self) -> i8 {
        match self {
            PieceTeam::Light => 6,
            PieceTeam::Dark => 1,
        }
    }

    /// The row direction this team's pawns advance in.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            PieceTeam::Light => -1,
            PieceTeam::Dark => 1,
        }
    }
}

/// The six kinds of chess piece. A closed set: move generation dispatches on
/// this enum with an exhaustive match rather than a runtime lookup table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}
