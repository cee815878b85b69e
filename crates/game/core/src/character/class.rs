//! Character classes and their creation templates.

use core::str::FromStr;

use strum::{EnumIter, IntoEnumIterator};

use super::error::CharacterError;

/// Playable character class. Fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharacterClass {
    /// Durable melee fighter.
    #[cfg_attr(feature = "serde", serde(alias = "guerrero"))]
    Warrior,
    /// Fragile caster with the highest damage.
    #[cfg_attr(feature = "serde", serde(alias = "mago"))]
    Mage,
    /// Balanced striker.
    #[cfg_attr(feature = "serde", serde(alias = "asesino"))]
    Assassin,
}

/// Starting stats for a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassTemplate {
    pub max_health: i32,
    pub damage: i32,
}

impl CharacterClass {
    /// Returns the creation template for this class.
    pub const fn template(self) -> ClassTemplate {
        match self {
            Self::Warrior => ClassTemplate {
                max_health: 140,
                damage: 18,
            },
            Self::Mage => ClassTemplate {
                max_health: 90,
                damage: 25,
            },
            Self::Assassin => ClassTemplate {
                max_health: 110,
                damage: 22,
            },
        }
    }

    /// Name used by the original Spanish-language bot.
    pub const fn legacy_name(self) -> &'static str {
        match self {
            Self::Warrior => "guerrero",
            Self::Mage => "mago",
            Self::Assassin => "asesino",
        }
    }

    /// Comma-separated list of selectable class names, for error replies.
    pub fn available() -> String {
        Self::iter()
            .map(|class| class.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for CharacterClass {
    type Err = CharacterError;

    /// Parses a class name case-insensitively. Both the English names and the
    /// legacy Spanish names are accepted.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim().to_lowercase();
        Self::iter()
            .find(|class| class.to_string() == wanted || class.legacy_name() == wanted)
            .ok_or_else(|| CharacterError::UnknownClass {
                name: name.trim().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Warrior".parse::<CharacterClass>(), Ok(CharacterClass::Warrior));
        assert_eq!("  MAGE ".parse::<CharacterClass>(), Ok(CharacterClass::Mage));
        assert_eq!("assassin".parse::<CharacterClass>(), Ok(CharacterClass::Assassin));
    }

    #[test]
    fn parses_legacy_names() {
        assert_eq!("guerrero".parse::<CharacterClass>(), Ok(CharacterClass::Warrior));
        assert_eq!("Mago".parse::<CharacterClass>(), Ok(CharacterClass::Mage));
        assert_eq!("ASESINO".parse::<CharacterClass>(), Ok(CharacterClass::Assassin));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "paladin".parse::<CharacterClass>().unwrap_err();
        assert_eq!(
            err,
            CharacterError::UnknownClass {
                name: "paladin".to_string()
            }
        );
        assert!("".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn lists_available_classes() {
        assert_eq!(CharacterClass::available(), "warrior, mage, assassin");
    }
}
