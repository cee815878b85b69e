//! Errors reported back to the player who issued a command.

use std::fmt;

use game_core::{CharacterClass, CharacterError, CombatError, ErrorSeverity, GameError, PlayerId};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Why a duel target was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidTarget {
    /// The challenger named themselves.
    SelfDuel,
    /// The opponent has not created a character.
    NoCharacter(PlayerId),
}

impl fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfDuel => f.write_str("you cannot duel yourself"),
            Self::NoCharacter(player) => write!(f, "player {player} has no character to duel"),
        }
    }
}

/// Failure of a single command. No command that fails mutates the store.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown class '{name}'; available classes: {available}")]
    UnknownClass { name: String, available: String },

    #[error("player {player} already has a character")]
    DuplicateCharacter { player: PlayerId },

    #[error("player {player} has no character; create one first")]
    CharacterNotFound { player: PlayerId },

    #[error("{0}")]
    InvalidTarget(InvalidTarget),

    #[error("player data is unreadable: {0}")]
    CorruptState(String),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("player store failure: {0}")]
    Repository(#[source] RepositoryError),
}

impl From<CharacterError> for CommandError {
    fn from(error: CharacterError) -> Self {
        match error {
            CharacterError::UnknownClass { name } => Self::UnknownClass {
                name,
                available: CharacterClass::available(),
            },
        }
    }
}

impl From<RepositoryError> for CommandError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::CorruptState(detail) => Self::CorruptState(detail),
            other => Self::Repository(other),
        }
    }
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownClass { .. }
            | Self::DuplicateCharacter { .. }
            | Self::CharacterNotFound { .. }
            | Self::InvalidTarget(_) => ErrorSeverity::Validation,
            Self::Combat(error) => error.severity(),
            Self::CorruptState(_) | Self::Repository(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownClass { .. } => "UNKNOWN_CLASS",
            Self::DuplicateCharacter { .. } => "DUPLICATE_CHARACTER",
            Self::CharacterNotFound { .. } => "CHARACTER_NOT_FOUND",
            Self::InvalidTarget(_) => "INVALID_TARGET",
            Self::CorruptState(_) => "CORRUPT_STATE",
            Self::Combat(error) => error.error_code(),
            Self::Repository(_) => "REPOSITORY_FAILURE",
        }
    }
}
