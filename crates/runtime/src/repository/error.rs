//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("player store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    /// Persisted data exists but cannot be parsed.
    #[error("corrupted player data: {0}")]
    CorruptState(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
