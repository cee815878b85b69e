//! Worker tasks that back the runtime orchestration.
//!
//! The command worker is the single writer of the player store: every command
//! is executed on it, one at a time.

mod command;

pub use command::{Command, CommandWorker};
