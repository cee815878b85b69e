//! Repository layer for the player roster.
//!
//! Repositories handle data that CHANGES during play: one character record
//! per player id, read and written as a whole. Static rules and balance
//! numbers live in `game-core`, not here.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use traits::PlayerRepository;
