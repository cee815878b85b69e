use crate::error::{ErrorSeverity, GameError};

/// Errors raised while creating characters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    #[error("unknown class '{name}'")]
    UnknownClass { name: String },
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownClass { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownClass { .. } => "CHARACTER_UNKNOWN_CLASS",
        }
    }
}
