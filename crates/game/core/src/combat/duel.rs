//! Duel (PvP) resolution.

use rand::Rng;

use super::error::{CombatError, ensure_positive_damage};
use crate::character::Character;
use crate::config::GameConfig;
use crate::rating::RatingUpdate;

/// Side of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelSide {
    /// The player who issued the challenge; strikes first.
    Challenger,
    Defender,
}

/// Rating before and after a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingChange {
    pub before: i32,
    pub after: i32,
}

impl RatingChange {
    pub const fn delta(&self) -> i32 {
        self.after - self.before
    }
}

/// Result of one duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuelOutcome {
    pub winner: DuelSide,
    pub turns: u32,
    pub challenger_rating: RatingChange,
    pub defender_rating: RatingChange,
}

/// Rolls one hit in `[damage - variance, damage + variance]`.
fn roll_hit<R: Rng + ?Sized>(rng: &mut R, damage: i32) -> i32 {
    let low = damage.saturating_sub(GameConfig::DUEL_VARIANCE);
    let high = damage.saturating_add(GameConfig::DUEL_VARIANCE);
    rng.gen_range(low..=high)
}

/// Fights a duel and records the result on both characters.
///
/// Both sides start from `max_health`. The challenger strikes on odd turns and
/// the defender on even turns, one hit per turn, until a working health drops
/// to zero or below. The challenger wins if its working health is still
/// positive. The winner gains a win; both ratings are updated from the
/// pre-duel snapshot. Experience, health, and chapter are left untouched.
pub fn resolve_duel<R: Rng + ?Sized>(
    challenger: &mut Character,
    defender: &mut Character,
    rng: &mut R,
) -> Result<DuelOutcome, CombatError> {
    ensure_positive_damage(challenger.damage)?;
    ensure_positive_damage(defender.damage)?;

    let mut challenger_health = challenger.max_health;
    let mut defender_health = defender.max_health;
    let mut turns = 0;

    while challenger_health > 0 && defender_health > 0 {
        turns += 1;
        if turns % 2 == 1 {
            defender_health = defender_health.saturating_sub(roll_hit(rng, challenger.damage));
        } else {
            challenger_health = challenger_health.saturating_sub(roll_hit(rng, defender.damage));
        }
    }

    let winner = if challenger_health > 0 {
        DuelSide::Challenger
    } else {
        DuelSide::Defender
    };

    let challenger_before = challenger.rating;
    let defender_before = defender.rating;

    match winner {
        DuelSide::Challenger => {
            let update = RatingUpdate::from_match(challenger_before, defender_before);
            challenger.wins += 1;
            challenger.rating = update.winner;
            defender.rating = update.loser;
        }
        DuelSide::Defender => {
            let update = RatingUpdate::from_match(defender_before, challenger_before);
            defender.wins += 1;
            defender.rating = update.winner;
            challenger.rating = update.loser;
        }
    }

    Ok(DuelOutcome {
        winner,
        turns,
        challenger_rating: RatingChange {
            before: challenger_before,
            after: challenger.rating,
        },
        defender_rating: RatingChange {
            before: defender_before,
            after: defender.rating,
        },
    })
}
