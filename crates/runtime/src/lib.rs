//! Runtime for the arena bot.
//!
//! This crate wires the `game-core` rules to a player store and serves bot
//! commands through a single command worker. Transports embed [`Runtime`] and
//! talk to it through the cloneable [`BotHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream transports interact with
//! - [`commands`] holds one handler per bot command
//! - [`repository`] provides the player store and its implementations
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod commands;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{
    BotHandle, NameDirectory, NameResolver, RankedPlayer, Result, RuntimeError, resolve_ranking,
};
pub use commands::{BotCommand, CommandError, InvalidTarget, Reply};
pub use repository::{
    InMemoryRepository, JsonFileRepository, PlayerRepository, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
