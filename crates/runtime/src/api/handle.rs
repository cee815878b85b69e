//! Cloneable façade for issuing commands to the runtime.
//!
//! [`BotHandle`] hides channel plumbing and offers one async helper per bot
//! command. Every call is queued on the command worker, so concurrent
//! callers never interleave their load-mutate-save cycles.
use tokio::sync::{mpsc, oneshot};

use game_core::PlayerId;

use super::errors::{Result, RuntimeError};
use crate::commands::{BotCommand, Reply};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct BotHandle {
    command_tx: mpsc::Sender<Command>,
}

impl BotHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>) -> Self {
        Self { command_tx }
    }

    /// Execute any command and wait for its reply
    pub async fn execute(&self, command: BotCommand) -> Result<Reply> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Execute {
                command,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        let reply = reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?;
        Ok(reply?)
    }

    /// Create a character for `player`
    pub async fn create(&self, player: PlayerId, class: impl Into<String>) -> Result<Reply> {
        self.execute(BotCommand::Create {
            player,
            class: class.into(),
        })
        .await
    }

    /// Show `player`'s character
    pub async fn profile(&self, player: PlayerId) -> Result<Reply> {
        self.execute(BotCommand::Profile { player }).await
    }

    /// Attempt `player`'s next story chapter
    pub async fn story(&self, player: PlayerId) -> Result<Reply> {
        self.execute(BotCommand::Story { player }).await
    }

    /// Fight a ranked duel
    pub async fn duel(&self, challenger: PlayerId, opponent: PlayerId) -> Result<Reply> {
        self.execute(BotCommand::Duel {
            challenger,
            opponent,
        })
        .await
    }

    /// Top of the rating ladder
    pub async fn ranking(&self) -> Result<Reply> {
        self.execute(BotCommand::Ranking).await
    }
}
