use crate::board_location::BoardLocation;
use crate::castle_rights::CastleRights;
use crate::chess_move::ChessMove;
use crate::errors::Errors;
use crate::moves::{castling, king_moves, knight_moves, pawn_moves, sliding_moves};
use crate::piece_record::{PieceRecord, SquareCode, EMPTY_SQUARE_CODE};
use crate::piece_types::{PieceClass, PieceTeam};

/// The 8x8 mailbox grid. Row 0 is rank 8, row 7 is rank 1.
pub type BoardGrid = [[SquareCode; 8]; 8];

/// Result of the most recent `get_legal_moves` call. A pure function of
/// (legal move count, check status, remaining material).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Mutable game position: grid, side to move, castling rights, en-passant
/// target, king locations, and the undo history.
///
/// One instance lives per game and is mutated in place through paired
/// `make_move` / `undo_move` calls; the search forks positions exclusively
/// through that pairing, never by copying the board. Not reentrant:
/// concurrent searches over one instance are excluded by construction.
#[derive(Clone)]
pub struct BoardState {
    pub grid: BoardGrid,
    pub turn: PieceTeam,
    pub move_history: Vec<ChessMove>,
    pub castle_rights: CastleRights,
    castle_rights_log: Vec<CastleRights>,
    pub en_passant_target: Option<BoardLocation>,
    light_king_location: BoardLocation,
    dark_king_location: BoardLocation,
    pub status: GameStatus,
}

impl BoardState {
    /// The standard starting position, light to move.
    pub fn new_game() -> Self {
        use PieceClass::*;
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut grid: BoardGrid = [[None; 8]; 8];
        for (col, class) in back_rank.into_iter().enumerate() {
            grid[0][col] = Some(PieceRecord::new(PieceTeam::Dark, class));
            grid[1][col] = Some(PieceRecord::new(PieceTeam::Dark, Pawn));
            grid[6][col] = Some(PieceRecord::new(PieceTeam::Light, Pawn));
            grid[7][col] = Some(PieceRecord::new(PieceTeam::Light, class));
        }
        BoardState {
            grid,
            turn: PieceTeam::Light,
            move_history: Vec::new(),
            castle_rights: CastleRights::all(),
            castle_rights_log: vec![CastleRights::all()],
            en_passant_target: None,
            light_king_location: (7, 4),
            dark_king_location: (0, 4),
            status: GameStatus::Ongoing,
        }
    }

    /// Builds a position from an 8x8 grid of square codes (row 0 = rank 8),
    /// e.g. `"wK"`, `"bp"`, `"--"`. Both kings must be present.
    pub fn from_grid(codes: &[[&str; 8]; 8], turn: PieceTeam) -> Result<Self, Errors> {
        let mut grid: BoardGrid = [[None; 8]; 8];
        let mut light_king = None;
        let mut dark_king = None;
        for (row, row_codes) in codes.iter().enumerate() {
            for (col, code) in row_codes.iter().enumerate() {
                let square = PieceRecord::from_code(code)?;
                if let Some(piece) = square {
                    if piece.class == PieceClass::King {
                        match piece.team {
                            PieceTeam::Light => light_king = Some((row as i8, col as i8)),
                            PieceTeam::Dark => dark_king = Some((row as i8, col as i8)),
                        }
                    }
                }
                grid[row][col] = square;
            }
        }
        match (light_king, dark_king) {
            (Some(light_king_location), Some(dark_king_location)) => Ok(BoardState {
                grid,
                turn,
                move_history: Vec::new(),
                castle_rights: CastleRights::all(),
                castle_rights_log: vec![CastleRights::all()],
                en_passant_target: None,
                light_king_location,
                dark_king_location,
                status: GameStatus::Ongoing,
            }),
            _ => Err(Errors::InvalidBoardSetup),
        }
    }

    pub fn piece_at(&self, at: &BoardLocation) -> SquareCode {
        self.grid[at.0 as usize][at.1 as usize]
    }

    fn set_square(&mut self, at: &BoardLocation, square: SquareCode) {
        self.grid[at.0 as usize][at.1 as usize] = square;
    }

    pub fn king_location(&self, team: PieceTeam) -> BoardLocation {
        match team {
            PieceTeam::Light => self.light_king_location,
            PieceTeam::Dark => self.dark_king_location,
        }
    }

    /// 8x8 grid of two-character square codes for a rendering layer,
    /// row 0 = rank 8 downward; empty squares are `"--"`.
    pub fn snapshot(&self) -> [[&'static str; 8]; 8] {
        let mut codes = [[EMPTY_SQUARE_CODE; 8]; 8];
        for (row, row_squares) in self.grid.iter().enumerate() {
            for (col, square) in row_squares.iter().enumerate() {
                if let Some(piece) = square {
                    codes[row][col] = piece.code();
                }
            }
        }
        codes
    }

    /// Applies a generated move: relocates the piece, handles promotion,
    /// en passant, and castling side effects, re-arms or clears the
    /// en-passant target, and appends to the history stacks.
    ///
    /// `testing` skips castle-rights revocation so legality-checking
    /// simulations do not corrupt the rights bookkeeping; the snapshot log
    /// is still pushed so `undo_move` stays balanced.
    pub fn make_move(&mut self, mv: &ChessMove, testing: bool) {
        self.set_square(&mv.start, None);
        self.set_square(&mv.stop, Some(mv.piece_moved));
        self.move_history.push(mv.clone());
        self.turn = self.turn.opponent();

        if mv.piece_moved.class == PieceClass::King {
            match mv.piece_moved.team {
                PieceTeam::Light => self.light_king_location = mv.stop,
                PieceTeam::Dark => self.dark_king_location = mv.stop,
            }
        }

        if mv.is_promotion {
            let queen = PieceRecord::new(mv.piece_moved.team, PieceClass::Queen);
            self.set_square(&mv.stop, Some(queen));
        }

        if mv.is_en_passant {
            // The captured pawn sits on the mover's start row, destination file.
            self.set_square(&(mv.start.0, mv.stop.1), None);
        }

        if mv.is_double_pawn_push() {
            self.en_passant_target = Some(((mv.start.0 + mv.stop.0) / 2, mv.start.1));
        } else {
            self.en_passant_target = None;
        }

        if mv.is_castling {
            let row = mv.stop.0;
            if mv.stop.1 - mv.start.1 == 2 {
                // Kingside: rook hops from the corner to the king's near side.
                let rook = self.piece_at(&(row, mv.stop.1 + 1));
                self.set_square(&(row, mv.stop.1 - 1), rook);
                self.set_square(&(row, mv.stop.1 + 1), None);
            } else if mv.stop.1 - mv.start.1 == -2 {
                let rook = self.piece_at(&(row, mv.stop.1 - 2));
                self.set_square(&(row, mv.stop.1 + 1), rook);
                self.set_square(&(row, mv.stop.1 - 2), None);
            }
        }

        if !testing {
            self.update_castle_rights(mv);
        }
        self.castle_rights_log.push(self.castle_rights);
    }

    /// Revokes castling rights on king moves, rook moves off their original
    /// corner squares, and rook captures on those squares. Rights never come
    /// back except through `undo_move`.
    fn update_castle_rights(&mut self, mv: &ChessMove) {
        let team = mv.piece_moved.team;
        match mv.piece_moved.class {
            PieceClass::King => self.castle_rights.revoke_both(team),
            PieceClass::Rook if mv.start.0 == team.back_row() => {
                if mv.start.1 == 0 {
                    self.castle_rights.revoke_queenside(team);
                } else if mv.start.1 == 7 {
                    self.castle_rights.revoke_kingside(team);
                }
            }
            _ => {}
        }

        if let Some(taken) = mv.piece_taken {
            if taken.class == PieceClass::Rook && mv.stop.0 == taken.team.back_row() {
                if mv.stop.1 == 0 {
                    self.castle_rights.revoke_queenside(taken.team);
                } else if mv.stop.1 == 7 {
                    self.castle_rights.revoke_kingside(taken.team);
                }
            }
        }
    }

    /// Reverts the most recent move, restoring board contents, king
    /// locations, and the prior castle-rights snapshot. No-op on an empty
    /// history.
    ///
    /// The en-passant target is cleared rather than restored to its prior
    /// value, and the game status resets to `Ongoing`; callers re-derive
    /// both through `get_legal_moves` when they need them.
    pub fn undo_move(&mut self) {
        let mv = match self.move_history.pop() {
            Some(mv) => mv,
            None => return,
        };

        self.set_square(&mv.start, Some(mv.piece_moved));
        self.set_square(&mv.stop, mv.piece_taken);
        self.turn = self.turn.opponent();

        if mv.piece_moved.class == PieceClass::King {
            match mv.piece_moved.team {
                PieceTeam::Light => self.light_king_location = mv.start,
                PieceTeam::Dark => self.dark_king_location = mv.start,
            }
        }

        if mv.is_en_passant {
            self.set_square(&mv.stop, None);
            self.set_square(&(mv.start.0, mv.stop.1), mv.piece_taken);
        }

        self.castle_rights_log.pop();
        if let Some(last) = self.castle_rights_log.last() {
            self.castle_rights = *last;
        }

        if mv.is_castling {
            let row = mv.stop.0;
            if mv.stop.1 - mv.start.1 == 2 {
                let rook = self.piece_at(&(row, mv.stop.1 - 1));
                self.set_square(&(row, mv.stop.1 + 1), rook);
                self.set_square(&(row, mv.stop.1 - 1), None);
            } else if mv.stop.1 - mv.start.1 == -2 {
                let rook = self.piece_at(&(row, mv.stop.1 + 1));
                self.set_square(&(row, mv.stop.1 - 2), rook);
                self.set_square(&(row, mv.stop.1 + 1), None);
            }
        }

        self.en_passant_target = None;
        self.status = GameStatus::Ongoing;
    }

    /// All pseudo-legal moves for the side to move, dispatched per piece
    /// class. Castling is handled separately in `get_legal_moves` so that
    /// threat probing here cannot recurse.
    pub fn get_all_moves(&self) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for row in 0..8i8 {
            for col in 0..8i8 {
                let from = (row, col);
                let piece = match self.piece_at(&from) {
                    Some(piece) if piece.team == self.turn => piece,
                    _ => continue,
                };
                match piece.class {
                    PieceClass::Pawn => pawn_moves::collect(self, from, &mut moves),
                    PieceClass::Knight => knight_moves::collect(self, from, &mut moves),
                    PieceClass::King => king_moves::collect(self, from, &mut moves),
                    PieceClass::Rook => sliding_moves::collect_rook(self, from, &mut moves),
                    PieceClass::Bishop => sliding_moves::collect_bishop(self, from, &mut moves),
                    PieceClass::Queen => sliding_moves::collect_queen(self, from, &mut moves),
                }
            }
        }
        moves
    }

    /// Fully legal moves for the side to move, with game status derivation.
    ///
    /// Candidates are generated pseudo-legally (plus castling), then each is
    /// applied in testing mode and discarded if it leaves the mover's own
    /// king threatened. The en-passant target and castle rights saved at
    /// entry are restored before returning, guarding against side effects of
    /// the simulation loop.
    pub fn get_legal_moves(&mut self) -> Vec<ChessMove> {
        let saved_target = self.en_passant_target;
        let saved_rights = self.castle_rights;

        let mut candidates = self.get_all_moves();
        let king_at = self.king_location(self.turn);
        castling::collect(self, king_at, &mut candidates);

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            self.make_move(&mv, true);
            self.turn = self.turn.opponent();
            let exposes_king = self.in_check();
            self.turn = self.turn.opponent();
            self.undo_move();
            if !exposes_king {
                legal.push(mv);
            }
        }

        self.en_passant_target = saved_target;
        self.castle_rights = saved_rights;

        // Bare kings cannot force progress; the game halts as a stalemate
        // regardless of how many king moves remain.
        if self.only_kings_remain() {
            self.status = GameStatus::Stalemate;
            return Vec::new();
        }

        self.status = if legal.is_empty() {
            if self.in_check() {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            }
        } else {
            GameStatus::Ongoing
        };
        legal
    }

    fn only_kings_remain(&self) -> bool {
        self.grid
            .iter()
            .flatten()
            .filter_map(|square| square.as_ref())
            .all(|piece| piece.class == PieceClass::King)
    }

    /// Whether the side to move has its king under attack.
    pub fn in_check(&mut self) -> bool {
        let king_at = self.king_location(self.turn);
        self.square_threatened(king_at)
    }

    /// Whether the opponent of the side to move attacks the given square.
    ///
    /// Flips the side-to-move marker, generates the opponent's pseudo-legal
    /// moves (no legality filtering, so no recursion), and restores the
    /// marker before answering.
    pub fn square_threatened(&mut self, target: BoardLocation) -> bool {
        self.turn = self.turn.opponent();
        let opponent_moves = self.get_all_moves();
        self.turn = self.turn.opponent();
        opponent_moves.iter().any(|mv| mv.stop == target)
    }
}
