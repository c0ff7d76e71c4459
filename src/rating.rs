//! Elo-style skill ratings.
//!
//! The search engine consumes the rounded rating to pick its difficulty
//! parameters; after a game both players' ratings are adjusted with a fixed
//! K-factor of 64 against the expected score formula.

/// Fixed K-factor applied to every update.
pub const RATING_K_FACTOR: f64 = 64.0;

/// Neutral starting rating, also the fallback when persisted data is
/// missing or corrupt.
pub const NEUTRAL_RATING: f64 = 1200.0;

/// Outcome of a finished game from one player's perspective.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// The conventional score value: 1, 0.5, or 0.
    pub fn score(&self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }

    /// The same game seen from the opponent's side.
    pub fn reversed(&self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Draw => GameResult::Draw,
            GameResult::Loss => GameResult::Win,
        }
    }
}

/// One player's rating, kept fractional between updates and rounded at the
/// interface to the search and the persistence layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlayerRating {
    rating: f64,
}

impl PlayerRating {
    pub fn new() -> Self {
        PlayerRating {
            rating: NEUTRAL_RATING,
        }
    }

    pub fn from_value(rating: f64) -> Self {
        PlayerRating { rating }
    }

    pub fn value(&self) -> f64 {
        self.rating
    }

    /// The integer rating exposed to the search tiers and the rating log.
    pub fn rounded(&self) -> i32 {
        self.rating.round() as i32
    }

    /// Applies `rating += K * (result - expected)` where the expected score
    /// is `1 / (1 + 10^((opponent - rating) / 400))`.
    pub fn update(&mut self, opponent_rating: f64, result: GameResult) {
        let expected = 1.0 / (1.0 + 10f64.powf((opponent_rating - self.rating) / 400.0));
        self.rating += RATING_K_FACTOR * (result.score() - expected);
    }
}

impl Default for PlayerRating {
    fn default() -> Self {
        PlayerRating::new()
    }
}

/// Applies one game's outcome to both players symmetrically.
///
/// Both updates read the pre-game ratings, so for equal starting ratings a
/// decisive result moves the two players by equal and opposite amounts.
pub fn apply_game_result(
    white: &mut PlayerRating,
    black: &mut PlayerRating,
    white_result: GameResult,
) {
    let white_before = white.value();
    let black_before = black.value();
    white.update(black_before, white_result);
    black.update(white_before, white_result.reversed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_ratings_move_by_thirty_two_on_a_decisive_game() {
        let mut white = PlayerRating::new();
        let mut black = PlayerRating::new();
        apply_game_result(&mut white, &mut black, GameResult::Win);
        assert_eq!(white.rounded(), 1232);
        assert_eq!(black.rounded(), 1168);
        assert!((white.value() - 1200.0 + (black.value() - 1200.0)).abs() < 1e-9);
    }

    #[test]
    fn equal_ratings_are_unchanged_by_a_draw() {
        let mut white = PlayerRating::new();
        let mut black = PlayerRating::new();
        apply_game_result(&mut white, &mut black, GameResult::Draw);
        assert_eq!(white.rounded(), 1200);
        assert_eq!(black.rounded(), 1200);
    }

    #[test]
    fn favorites_gain_less_from_expected_wins() {
        let mut favorite = PlayerRating::from_value(1400.0);
        favorite.update(1200.0, GameResult::Win);
        let favorite_gain = favorite.value() - 1400.0;

        let mut underdog = PlayerRating::from_value(1200.0);
        underdog.update(1400.0, GameResult::Win);
        let underdog_gain = underdog.value() - 1200.0;

        assert!(favorite_gain > 0.0);
        assert!(underdog_gain > favorite_gain);
    }

    #[test]
    fn rounding_happens_only_at_the_interface() {
        let mut player = PlayerRating::from_value(1200.4);
        assert_eq!(player.rounded(), 1200);
        player.update(1200.4, GameResult::Draw);
        assert!((player.value() - 1200.4).abs() < 1e-9);
    }
}
