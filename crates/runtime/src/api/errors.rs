//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and command handling so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::commands::CommandError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The command itself was refused; the message is meant for the player.
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("command worker channel closed")]
    CommandChannelClosed,

    #[error("command worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("command worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a player repository before building")]
    MissingRepository,
}

impl RuntimeError {
    /// Returns the command error if the failure came from the game rules.
    pub fn as_command_error(&self) -> Option<&CommandError> {
        match self {
            Self::Command(error) => Some(error),
            _ => None,
        }
    }
}
