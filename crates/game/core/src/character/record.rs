//! Persisted character record and the progression rule.

use super::class::CharacterClass;
use super::error::CharacterError;
use crate::config::GameConfig;

/// One player's character.
///
/// Field names follow the roster JSON format. The `alias` attributes accept
/// rosters written by the original Spanish-language bot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    #[cfg_attr(feature = "serde", serde(alias = "clase"))]
    pub class: CharacterClass,

    #[cfg_attr(feature = "serde", serde(alias = "nivel"))]
    pub level: u32,

    #[cfg_attr(feature = "serde", serde(alias = "xp"))]
    pub experience: u32,

    /// Currency granted at creation. Nothing spends or earns it yet.
    #[cfg_attr(feature = "serde", serde(alias = "oro"))]
    pub gold: i64,

    /// PvP victories.
    #[cfg_attr(feature = "serde", serde(alias = "victorias"))]
    pub wins: u32,

    /// Next story chapter to attempt.
    #[cfg_attr(feature = "serde", serde(alias = "historia"))]
    pub chapter: u32,

    #[cfg_attr(feature = "serde", serde(alias = "elo"))]
    pub rating: i32,

    #[cfg_attr(feature = "serde", serde(alias = "vida"))]
    pub health: i32,

    #[cfg_attr(feature = "serde", serde(alias = "max_vida"))]
    pub max_health: i32,

    #[cfg_attr(feature = "serde", serde(alias = "daño"))]
    pub damage: i32,
}

impl Character {
    /// Creates a fresh level-1 character from the class template.
    pub fn new(class: CharacterClass) -> Self {
        let template = class.template();
        Self {
            class,
            level: GameConfig::STARTING_LEVEL,
            experience: 0,
            gold: GameConfig::STARTING_GOLD,
            wins: 0,
            chapter: GameConfig::STARTING_CHAPTER,
            rating: GameConfig::STARTING_RATING,
            health: template.max_health,
            max_health: template.max_health,
            damage: template.damage,
        }
    }

    /// Creates a character from a user-supplied class name.
    pub fn create(class_name: &str) -> Result<Self, CharacterError> {
        Ok(Self::new(class_name.parse()?))
    }

    /// Experience needed to leave the current level.
    pub const fn level_threshold(&self) -> u32 {
        self.level.saturating_mul(GameConfig::XP_PER_LEVEL)
    }

    /// Promotes the character by one level if enough experience was banked.
    ///
    /// At most one level is gained per call even when the banked experience
    /// would cover several thresholds. Returns whether a level was gained; on
    /// `false` nothing is modified.
    pub fn try_level_up(&mut self) -> bool {
        if self.experience < self.level_threshold() {
            return false;
        }

        self.level += 1;
        self.experience = 0;
        self.max_health += GameConfig::LEVEL_UP_HEALTH;
        self.health = self.max_health;
        self.damage += GameConfig::LEVEL_UP_DAMAGE;
        true
    }

    pub fn restore_health(&mut self) {
        self.health = self.max_health;
    }
}
