use crate::piece_types::PieceTeam;

/// Per-side, per-direction castling permissions.
///
/// Flags only ever go from true to false during play; a revoked right comes
/// back only through `undo_move` restoring an earlier snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CastleRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastleRights {
    /// All four rights granted, as at the start of a game.
    pub fn all() -> Self {
        CastleRights {
            light_kingside: true,
            light_queenside: true,
            dark_kingside: true,
            dark_queenside: true,
        }
    }

    pub fn kingside(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.light_kingside,
            PieceTeam::Dark => self.dark_kingside,
        }
    }

    pub fn queenside(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.light_queenside,
            PieceTeam::Dark => self.dark_queenside,
        }
    }

    pub fn revoke_both(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Light => {
                self.light_kingside = false;
                self.light_queenside = false;
            }
            PieceTeam::Dark => {
                self.dark_kingside = false;
                self.dark_queenside = false;
            }
        }
    }

    pub fn revoke_kingside(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Light => self.light_kingside = false,
            PieceTeam::Dark => self.dark_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Light => self.light_queenside = false,
            PieceTeam::Dark => self.dark_queenside = false,
        }
    }
}
