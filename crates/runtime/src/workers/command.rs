//! Command worker that owns the player repository and the duel RNG.
//!
//! Receives commands from [`BotHandle`](crate::api::BotHandle), runs them
//! through the command handlers strictly in arrival order, and replies on the
//! per-command oneshot channel.

use std::sync::Arc;

use game_core::GameError;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::commands::{self, BotCommand, CommandContext, CommandResult};
use crate::repository::PlayerRepository;

/// Commands that can be sent to the command worker
pub enum Command {
    /// Run a bot command and report its result.
    Execute {
        command: BotCommand,
        reply: oneshot::Sender<CommandResult>,
    },
}

/// Background task that processes bot commands.
pub struct CommandWorker {
    repository: Arc<dyn PlayerRepository>,
    rng: StdRng,
    command_rx: mpsc::Receiver<Command>,
}

impl CommandWorker {
    /// Creates a new command worker.
    pub fn new(
        repository: Arc<dyn PlayerRepository>,
        rng: StdRng,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            repository,
            rng,
            command_rx,
        }
    }

    /// Main worker loop. Ends once every [`BotHandle`](crate::api::BotHandle) is dropped.
    pub async fn run(mut self) {
        info!("Command worker started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }

        info!("Command worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { command, reply } => {
                let result = self.execute(command);
                if reply.send(result).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn execute(&mut self, command: BotCommand) -> CommandResult {
        debug!(%command, "executing command");
        let name = command.name();

        let mut ctx = CommandContext {
            repository: self.repository.as_ref(),
            rng: &mut self.rng,
        };
        let result = commands::execute(&mut ctx, command);

        if let Err(e) = &result {
            let severity = e.severity();
            if severity.is_internal() {
                error!(
                    command = name,
                    code = e.error_code(),
                    severity = severity.as_str(),
                    "command failed: {}",
                    e
                );
            } else {
                warn!(command = name, code = e.error_code(), "command refused: {}", e);
            }
        }

        result
    }
}
