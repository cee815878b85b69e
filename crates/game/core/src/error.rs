//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `CharacterError`, `CombatError`) are defined in
//! their respective modules alongside the rules they validate. This module
//! only provides the shared classification used by every layer above.

/// Severity level of an error, used for categorization and logging priority.
///
/// - **Validation**: invalid user input, rejected without retry
/// - **Internal**: a rule invariant was violated (should be unreachable)
/// - **Fatal**: persisted or process state is unusable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown class, duel against yourself
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a character record with non-positive damage
    Internal,

    /// Fatal error - stored state cannot be read or written.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug or broken state.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all arena errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who must act (player, developer, operator)
/// - Keep `error_code` stable; transports and tests match on it
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_and_classification() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
    }
}
