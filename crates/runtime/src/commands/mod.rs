//! Command handlers.
//!
//! Each handler runs one full load-mutate-save cycle against the
//! [`PlayerRepository`]: it loads the roster, looks up the records it needs,
//! applies the `game-core` rules, saves (only when something changed), and
//! returns a structured [`Reply`] for the transport to render.

mod create;
mod duel;
mod error;
mod profile;
mod ranking;
mod story;

use std::fmt;

use game_core::{Character, DuelOutcome, LeaderboardEntry, PlayerId, StoryOutcome};
use rand::RngCore;

pub use error::{CommandError, InvalidTarget};

use crate::repository::PlayerRepository;

pub type CommandResult = std::result::Result<Reply, CommandError>;

/// A user-issued command, already parsed by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Create { player: PlayerId, class: String },
    Profile { player: PlayerId },
    Story { player: PlayerId },
    Duel { challenger: PlayerId, opponent: PlayerId },
    Ranking,
}

impl BotCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Profile { .. } => "profile",
            Self::Story { .. } => "story",
            Self::Duel { .. } => "duel",
            Self::Ranking => "ranking",
        }
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create { player, class } => write!(f, "create({player}, {class})"),
            Self::Profile { player } => write!(f, "profile({player})"),
            Self::Story { player } => write!(f, "story({player})"),
            Self::Duel {
                challenger,
                opponent,
            } => write!(f, "duel({challenger} vs {opponent})"),
            Self::Ranking => f.write_str("ranking"),
        }
    }
}

/// Successful result of a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Created {
        player: PlayerId,
        character: Character,
    },
    Profile {
        player: PlayerId,
        character: Character,
    },
    Story {
        player: PlayerId,
        outcome: StoryOutcome,
        /// The record after the attempt.
        character: Character,
    },
    Duel {
        challenger: PlayerId,
        defender: PlayerId,
        outcome: DuelOutcome,
    },
    Ranking {
        /// Highest rating first. Names are resolved by the transport.
        entries: Vec<LeaderboardEntry>,
    },
}

/// Dependencies a handler may touch.
pub struct CommandContext<'a> {
    pub repository: &'a dyn PlayerRepository,
    /// Source of duel randomness.
    pub rng: &'a mut dyn RngCore,
}

/// Runs one command to completion.
pub fn execute(ctx: &mut CommandContext<'_>, command: BotCommand) -> CommandResult {
    match command {
        BotCommand::Create { player, class } => create::handle(ctx, player, &class),
        BotCommand::Profile { player } => profile::handle(ctx, player),
        BotCommand::Story { player } => story::handle(ctx, player),
        BotCommand::Duel {
            challenger,
            opponent,
        } => duel::handle(ctx, challenger, opponent),
        BotCommand::Ranking => ranking::handle(ctx),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use game_core::Roster;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::repository::{InMemoryRepository, RepositoryError, Result};

    /// Runs a command against `repo` with a fixed seed.
    pub fn run(repo: &dyn PlayerRepository, command: BotCommand) -> CommandResult {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = CommandContext {
            repository: repo,
            rng: &mut rng,
        };
        execute(&mut ctx, command)
    }

    pub fn create(repo: &InMemoryRepository, player: &str, class: &str) {
        run(
            repo,
            BotCommand::Create {
                player: player.into(),
                class: class.to_string(),
            },
        )
        .expect("character creation should succeed");
    }

    /// Loads fine, refuses every save.
    pub struct ReadOnlyRepository(pub Roster);

    impl PlayerRepository for ReadOnlyRepository {
        fn load(&self) -> Result<Roster> {
            Ok(self.0.clone())
        }

        fn save(&self, _roster: &Roster) -> Result<()> {
            Err(RepositoryError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }
}
