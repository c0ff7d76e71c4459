//! Skill-adaptive move selection.
//!
//! A fail-hard alpha-beta search over the mutable board state, parameterized
//! by a skill rating. The rating picks the search depth and a chance of
//! playing a random move outright, and scales a noise term mixed into the
//! leaf evaluation so weaker opponents misjudge positions more often.

use rand::rngs::ThreadRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::board_state::{BoardGrid, BoardState};
use crate::chess_move::ChessMove;
use crate::engines::skill_profile::{profile_for_rating, SkillProfile};
use crate::piece_types::PieceTeam;
use crate::scoring::{material_balance, Score, SCORE_BOUND};

/// Result of one alpha-beta call: the fail-hard score, plus the move that
/// achieved it when the call was the search root. The root move travels
/// through return values rather than shared state.
pub struct SearchOutcome {
    pub score: Score,
    pub best_move: Option<ChessMove>,
}

/// Move chooser owning its randomness source.
///
/// The RNG drives the random-move gate, the root shuffle, and the
/// evaluation noise; tests inject a seeded generator to make all three
/// deterministic.
pub struct SearchEngine<R: Rng> {
    rng: R,
}

impl SearchEngine<ThreadRng> {
    /// Engine backed by the thread-local RNG, for normal play.
    pub fn from_entropy() -> Self {
        SearchEngine { rng: rand::rng() }
    }
}

impl<R: Rng> SearchEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        SearchEngine { rng }
    }

    /// Chooses a move for the side to move at the given skill rating.
    ///
    /// Returns `None` only for an empty move list; callers are expected to
    /// have checked for game over first, so a `None` here means the contract
    /// was violated upstream.
    pub fn pick_best_move(
        &mut self,
        state: &mut BoardState,
        legal_moves: &[ChessMove],
        skill_rating: i32,
    ) -> Option<ChessMove> {
        let profile = profile_for_rating(skill_rating);
        self.pick_with_profile(state, legal_moves, &profile, skill_rating)
    }

    /// Like `pick_best_move` but with explicit search parameters, so tests
    /// can pin the depth and disable the random-move gate.
    pub fn pick_with_profile(
        &mut self,
        state: &mut BoardState,
        legal_moves: &[ChessMove],
        profile: &SkillProfile,
        skill_rating: i32,
    ) -> Option<ChessMove> {
        if legal_moves.is_empty() {
            return None;
        }

        // Bounded rationality: weak opponents sometimes skip the search.
        if self.rng.random::<f64>() < profile.random_chance {
            return legal_moves.choose(&mut self.rng).cloned();
        }

        // Shuffling removes positional bias among equal-scored moves.
        let mut shuffled = legal_moves.to_vec();
        shuffled.shuffle(&mut self.rng);

        let maximizing = state.turn == PieceTeam::Light;
        let outcome = self.alpha_beta(
            state,
            shuffled,
            profile.search_depth,
            -SCORE_BOUND,
            SCORE_BOUND,
            maximizing,
            skill_rating,
            profile.search_depth,
        );

        match outcome.best_move {
            Some(mv) => Some(mv),
            // The search failed to populate a root move; fall back to chance.
            None => legal_moves.choose(&mut self.rng).cloned(),
        }
    }

    /// Fail-hard alpha-beta minimax with capture-first ordering.
    ///
    /// Terminal nodes (depth exhausted or no moves) return the static
    /// evaluation as-is; mates are therefore valued only through material,
    /// never as distinct extreme scores. The move achieving the best score
    /// is recorded only at the root ply (`depth == root_depth`).
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        state: &mut BoardState,
        moves: Vec<ChessMove>,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        skill_rating: i32,
        root_depth: u8,
    ) -> SearchOutcome {
        if depth == 0 || moves.is_empty() {
            return SearchOutcome {
                score: self.evaluate_board(&state.grid, skill_rating),
                best_move: None,
            };
        }

        let mut best_move = None;
        if maximizing {
            let mut best = -SCORE_BOUND;
            for mv in order_moves(moves) {
                state.make_move(&mv, false);
                let replies = state.get_legal_moves();
                let reply = self.alpha_beta(
                    state,
                    replies,
                    depth - 1,
                    alpha,
                    beta,
                    false,
                    skill_rating,
                    root_depth,
                );
                state.undo_move();

                if reply.score > best {
                    best = reply.score;
                    if depth == root_depth {
                        best_move = Some(mv.clone());
                    }
                }
                alpha = alpha.max(reply.score);
                if beta <= alpha {
                    break;
                }
            }
            SearchOutcome {
                score: best,
                best_move,
            }
        } else {
            let mut best = SCORE_BOUND;
            for mv in order_moves(moves) {
                state.make_move(&mv, false);
                let replies = state.get_legal_moves();
                let reply = self.alpha_beta(
                    state,
                    replies,
                    depth - 1,
                    alpha,
                    beta,
                    true,
                    skill_rating,
                    root_depth,
                );
                state.undo_move();

                if reply.score < best {
                    best = reply.score;
                    if depth == root_depth {
                        best_move = Some(mv.clone());
                    }
                }
                beta = beta.min(reply.score);
                if beta <= alpha {
                    break;
                }
            }
            SearchOutcome {
                score: best,
                best_move,
            }
        }
    }

    /// Static evaluation: signed material balance plus a rating-scaled
    /// perturbation in [-1, 1]. At a clamped rating of 2000 the noise term
    /// vanishes; at 800 it spans the full range times 1.5.
    ///
    /// Fresh noise is drawn on every call, so repeated evaluation of one
    /// position is non-deterministic unless the engine was built with a
    /// seeded RNG and the call sequence is fixed.
    pub fn evaluate_board(&mut self, grid: &BoardGrid, skill_rating: i32) -> Score {
        let skill = skill_rating.clamp(800, 2000);
        let noise: Score =
            self.rng.random_range(-1.0..=1.0f32) * ((2000 - skill) as Score / 800.0);
        material_balance(grid) + noise
    }
}

/// Stable partition placing captures before quiet moves. No secondary
/// ordering by captured-piece value.
pub fn order_moves(moves: Vec<ChessMove>) -> Vec<ChessMove> {
    let (captures, quiets): (Vec<ChessMove>, Vec<ChessMove>) =
        moves.into_iter().partition(|mv| mv.is_capture());
    let mut ordered = captures;
    ordered.extend(quiets);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::board_state::BoardState;
    use crate::piece_record::PieceRecord;
    use crate::piece_types::{PieceClass, PieceTeam};

    fn seeded_engine(seed: u64) -> SearchEngine<StdRng> {
        SearchEngine::with_rng(StdRng::seed_from_u64(seed))
    }

    const SEARCH_ONLY: SkillProfile = SkillProfile {
        search_depth: 1,
        random_chance: 0.0,
    };

    /// Rating 2000 clamps the noise scale to zero, making evaluation pure
    /// material.
    const NOISELESS_RATING: i32 = 2000;

    fn hanging_queen_board() -> BoardState {
        let mut codes = [["--"; 8]; 8];
        codes[0][7] = "bK";
        codes[7][7] = "wK";
        codes[7][0] = "wR";
        codes[0][0] = "bQ";
        codes[4][2] = "bp";
        BoardState::from_grid(&codes, PieceTeam::Light).unwrap()
    }

    #[test]
    fn depth_one_pick_matches_exhaustive_one_ply_evaluation() {
        let mut state = hanging_queen_board();
        let legal = state.get_legal_moves();

        // Independent brute force over all successors, noise-free.
        let mut best_score = -SCORE_BOUND;
        for mv in &legal {
            state.make_move(mv, false);
            best_score = best_score.max(material_balance(&state.grid));
            state.undo_move();
        }

        let mut engine = seeded_engine(11);
        let chosen = engine
            .pick_with_profile(&mut state, &legal, &SEARCH_ONLY, NOISELESS_RATING)
            .unwrap();
        assert_eq!(chosen.to_notation(), "a1a8");
        state.make_move(&chosen, false);
        assert_eq!(material_balance(&state.grid), best_score);
        state.undo_move();
    }

    #[test]
    fn minimizing_side_grabs_the_hanging_piece() {
        let mut codes = [["--"; 8]; 8];
        codes[0][7] = "bK";
        codes[7][7] = "wK";
        codes[0][0] = "bR";
        codes[7][0] = "wQ";
        let mut state = BoardState::from_grid(&codes, PieceTeam::Dark).unwrap();
        let legal = state.get_legal_moves();

        let mut engine = seeded_engine(3);
        let chosen = engine
            .pick_with_profile(&mut state, &legal, &SEARCH_ONLY, NOISELESS_RATING)
            .unwrap();
        assert_eq!(chosen.to_notation(), "a8a1");
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let mut state = BoardState::new_game();
        let legal = state.get_legal_moves();
        let before_grid = state.grid;
        let before_turn = state.turn;
        let before_history = state.move_history.len();

        let profile = SkillProfile {
            search_depth: 3,
            random_chance: 0.0,
        };
        let mut engine = seeded_engine(5);
        let chosen = engine.pick_with_profile(&mut state, &legal, &profile, NOISELESS_RATING);
        assert!(chosen.is_some());
        assert_eq!(state.grid, before_grid);
        assert_eq!(state.turn, before_turn);
        assert_eq!(state.move_history.len(), before_history);
    }

    #[test]
    fn random_gate_always_fires_at_chance_one() {
        let mut state = BoardState::new_game();
        let legal = state.get_legal_moves();
        let profile = SkillProfile {
            search_depth: 4,
            random_chance: 1.0,
        };
        let mut engine = seeded_engine(42);
        let chosen = engine
            .pick_with_profile(&mut state, &legal, &profile, 900)
            .unwrap();
        assert!(legal.contains(&chosen));
    }

    #[test]
    fn empty_move_list_yields_no_choice() {
        let mut state = BoardState::new_game();
        let mut engine = seeded_engine(1);
        assert!(engine.pick_best_move(&mut state, &[], 1200).is_none());
    }

    #[test]
    fn evaluation_is_noise_free_at_the_rating_ceiling() {
        let state = BoardState::new_game();
        let mut engine = seeded_engine(9);
        for _ in 0..4 {
            assert_eq!(engine.evaluate_board(&state.grid, 2000), 0.0);
        }
    }

    #[test]
    fn seeded_engines_evaluate_identically() {
        let state = BoardState::new_game();
        let mut left = seeded_engine(77);
        let mut right = seeded_engine(77);
        for _ in 0..8 {
            assert_eq!(
                left.evaluate_board(&state.grid, 900),
                right.evaluate_board(&state.grid, 900)
            );
        }
    }

    #[test]
    fn weak_rating_noise_stays_within_scale() {
        let state = BoardState::new_game();
        let mut engine = seeded_engine(13);
        // Rating 800 gives the widest scale: (2000 - 800) / 800 = 1.5.
        for _ in 0..64 {
            let value = engine.evaluate_board(&state.grid, 800);
            assert!(value.abs() <= 1.5);
        }
    }

    #[test]
    fn captures_order_before_quiet_moves_stably() {
        let piece = |class| PieceRecord::new(PieceTeam::Light, class);
        let taken = PieceRecord::new(PieceTeam::Dark, PieceClass::Pawn);
        let quiet_a = ChessMove::new(piece(PieceClass::Knight), (7, 1), (5, 2), None);
        let capture_a = ChessMove::new(piece(PieceClass::Rook), (7, 0), (0, 0), Some(taken));
        let quiet_b = ChessMove::new(piece(PieceClass::Knight), (7, 6), (5, 5), None);
        let capture_b = ChessMove::new(piece(PieceClass::Queen), (7, 3), (3, 7), Some(taken));

        let ordered = order_moves(vec![
            quiet_a.clone(),
            capture_a.clone(),
            quiet_b.clone(),
            capture_b.clone(),
        ]);
        assert_eq!(ordered, vec![capture_a, capture_b, quiet_a, quiet_b]);
    }
}
