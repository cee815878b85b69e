//! Elo rating calculation.
//!
//! Ratings move by `K * (actual - expected)` after every duel, with the
//! K-factor from [`GameConfig::K_FACTOR`]. Results are rounded half to even,
//! so a delta of exactly `x.5` lands on the even neighbour.

use crate::config::GameConfig;

/// Result of a match from one side's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
}

impl MatchResult {
    pub const fn score(self) -> f64 {
        match self {
            Self::Win => 1.0,
            Self::Loss => 0.0,
        }
    }
}

/// Expected score of a player rated `rating` against `opponent_rating`.
pub fn expected_score(rating: i32, opponent_rating: i32) -> f64 {
    let exponent = f64::from(opponent_rating - rating) / GameConfig::RATING_SCALE;
    1.0 / (1.0 + 10_f64.powf(exponent))
}

/// Rating after one match.
pub fn new_rating(rating: i32, opponent_rating: i32, result: MatchResult) -> i32 {
    let expected = expected_score(rating, opponent_rating);
    let updated = f64::from(rating) + GameConfig::K_FACTOR * (result.score() - expected);
    updated.round_ties_even() as i32
}

/// Both sides' new ratings, computed from the same pre-match snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingUpdate {
    pub winner: i32,
    pub loser: i32,
}

impl RatingUpdate {
    pub fn from_match(winner_rating: i32, loser_rating: i32) -> Self {
        Self {
            winner: new_rating(winner_rating, loser_rating, MatchResult::Win),
            loser: new_rating(loser_rating, winner_rating, MatchResult::Loss),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_score_equal_ratings() {
        assert!((expected_score(1000, 1000) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn expected_score_favours_higher_rating() {
        let expected = expected_score(1200, 1000);
        assert!(expected > 0.75 && expected < 0.77);
        assert!((expected + expected_score(1000, 1200) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn equal_ratings_move_sixteen_points() {
        let update = RatingUpdate::from_match(1000, 1000);
        assert_eq!(update, RatingUpdate { winner: 1016, loser: 984 });
    }

    #[test]
    fn update_uses_pre_match_ratings_for_both_sides() {
        // 1000 beats 1200: expected 0.2403, gain 24.31 → 24.
        let update = RatingUpdate::from_match(1000, 1200);
        assert_eq!(update.winner, 1024);
        assert_eq!(update.loser, 1176);
    }

    #[test]
    fn favourite_winning_gains_little() {
        // 1400 beats 1000: expected 0.9091, gain 2.91 → 3.
        let update = RatingUpdate::from_match(1400, 1000);
        assert_eq!(update.winner, 1403);
        assert_eq!(update.loser, 997);
    }

    #[test]
    fn ratings_have_no_floor() {
        assert_eq!(new_rating(-50, -50, MatchResult::Loss), -66);
    }
}
