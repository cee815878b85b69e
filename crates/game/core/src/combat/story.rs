//! Story (PvE) encounter resolution.

use super::error::{CombatError, ensure_positive_damage};
use crate::character::Character;
use crate::config::GameConfig;

/// Scripted opponent guarding a story chapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub chapter: u32,
    pub health: i32,
    pub damage: i32,
}

impl Enemy {
    /// Builds the chapter's enemy.
    ///
    /// ```text
    /// health = 50 + 25 * chapter
    /// damage = 10 +  6 * chapter
    /// ```
    pub fn for_chapter(chapter: u32) -> Self {
        let c = i32::try_from(chapter).unwrap_or(i32::MAX);
        Self {
            chapter,
            health: GameConfig::ENEMY_BASE_HEALTH
                .saturating_add(GameConfig::ENEMY_HEALTH_PER_CHAPTER.saturating_mul(c)),
            damage: GameConfig::ENEMY_BASE_DAMAGE
                .saturating_add(GameConfig::ENEMY_DAMAGE_PER_CHAPTER.saturating_mul(c)),
        }
    }

    /// Experience granted for clearing the chapter: `50 + 15 * chapter`.
    pub fn experience_reward(&self) -> u32 {
        GameConfig::STORY_BASE_XP
            .saturating_add(GameConfig::STORY_XP_PER_CHAPTER.saturating_mul(self.chapter))
    }
}

/// Result of one story attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoryOutcome {
    Cleared {
        enemy: Enemy,
        rounds: u32,
        experience_gained: u32,
        leveled_up: bool,
    },
    Defeated {
        enemy: Enemy,
        rounds: u32,
    },
}

impl StoryOutcome {
    pub const fn enemy(&self) -> &Enemy {
        match self {
            Self::Cleared { enemy, .. } | Self::Defeated { enemy, .. } => enemy,
        }
    }

    pub const fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared { .. })
    }
}

/// Fights the character's current chapter and applies the result.
///
/// Every round both sides strike: the enemy hits back even on the round it
/// falls, so a character whose working health reaches zero on that round
/// still loses. Health is restored afterwards either way. A clear grants
/// experience, advances the chapter, and attempts one level-up.
pub fn resolve_story(character: &mut Character) -> Result<StoryOutcome, CombatError> {
    ensure_positive_damage(character.damage)?;

    let enemy = Enemy::for_chapter(character.chapter);
    let mut enemy_health = enemy.health;
    let mut player_health = character.health;
    let mut rounds = 0;

    while enemy_health > 0 && player_health > 0 {
        enemy_health = enemy_health.saturating_sub(character.damage);
        player_health = player_health.saturating_sub(enemy.damage);
        rounds += 1;
    }

    character.restore_health();

    if player_health <= 0 {
        return Ok(StoryOutcome::Defeated { enemy, rounds });
    }

    let experience_gained = enemy.experience_reward();
    character.experience = character.experience.saturating_add(experience_gained);
    character.chapter += 1;
    let leveled_up = character.try_level_up();

    Ok(StoryOutcome::Cleared {
        enemy,
        rounds,
        experience_gained,
        leveled_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;

    #[test]
    fn enemy_scales_with_chapter() {
        assert_eq!(
            Enemy::for_chapter(1),
            Enemy {
                chapter: 1,
                health: 75,
                damage: 16
            }
        );
        let fourth = Enemy::for_chapter(4);
        assert_eq!((fourth.health, fourth.damage), (150, 34));
        assert_eq!(fourth.experience_reward(), 110);
    }

    #[test]
    fn level_one_warrior_clears_chapter_one() {
        // Enemy 75/16 vs warrior 140/18:
        // 57/124, 39/108, 21/92, 3/76, -15/60 → cleared after five rounds.
        let mut warrior = Character::new(CharacterClass::Warrior);

        let outcome = resolve_story(&mut warrior).expect("damage is positive");

        assert_eq!(
            outcome,
            StoryOutcome::Cleared {
                enemy: Enemy::for_chapter(1),
                rounds: 5,
                experience_gained: 65,
                leveled_up: false,
            }
        );
        assert_eq!(warrior.chapter, 2);
        assert_eq!(warrior.experience, 65);
        assert_eq!(warrior.health, 140);
        assert_eq!(warrior.level, 1);
    }

    #[test]
    fn enemy_strikes_back_on_the_killing_round() {
        // 50/32, 25/16, 0/0: the enemy falls, but so does the player.
        let mut mage = Character::new(CharacterClass::Mage);
        mage.health = 48;

        let outcome = resolve_story(&mut mage).expect("damage is positive");

        assert_eq!(
            outcome,
            StoryOutcome::Defeated {
                enemy: Enemy::for_chapter(1),
                rounds: 3,
            }
        );
        assert_eq!(mage.chapter, 1);
        assert_eq!(mage.experience, 0);
        assert_eq!(mage.health, mage.max_health);
    }

    #[test]
    fn defeat_restores_health_without_progress() {
        let mut mage = Character::new(CharacterClass::Mage);
        mage.chapter = 6;

        let outcome = resolve_story(&mut mage).expect("damage is positive");

        assert!(!outcome.is_cleared());
        assert_eq!(outcome.enemy().health, 200);
        assert_eq!(mage.chapter, 6);
        assert_eq!(mage.experience, 0);
        assert_eq!(mage.health, 90);
    }

    #[test]
    fn clear_can_trigger_a_level_up() {
        let mut warrior = Character::new(CharacterClass::Warrior);
        warrior.experience = 40;

        let outcome = resolve_story(&mut warrior).expect("damage is positive");

        assert!(matches!(
            outcome,
            StoryOutcome::Cleared {
                leveled_up: true,
                ..
            }
        ));
        assert_eq!(warrior.level, 2);
        assert_eq!(warrior.experience, 0);
        assert_eq!(warrior.max_health, 160);
        assert_eq!(warrior.health, 160);
        assert_eq!(warrior.damage, 23);
        assert_eq!(warrior.chapter, 2);
    }

    #[test]
    fn rejects_non_positive_damage() {
        let mut broken = Character::new(CharacterClass::Assassin);
        broken.damage = 0;

        assert_eq!(
            resolve_story(&mut broken),
            Err(CombatError::NonPositiveDamage { damage: 0 })
        );
        assert_eq!(broken.chapter, 1);
    }
}
