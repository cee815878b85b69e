use crate::error::{ErrorSeverity, GameError};

/// Errors raised before an encounter is resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// A combatant with no positive damage would never finish an encounter.
    #[error("combatant has non-positive damage ({damage})")]
    NonPositiveDamage { damage: i32 },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NonPositiveDamage { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveDamage { .. } => "COMBAT_NON_POSITIVE_DAMAGE",
        }
    }
}

pub(crate) fn ensure_positive_damage(damage: i32) -> Result<(), CombatError> {
    if damage > 0 {
        Ok(())
    } else {
        Err(CombatError::NonPositiveDamage { damage })
    }
}
