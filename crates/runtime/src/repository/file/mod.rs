//! File-based repository implementations.

mod roster;

pub use roster::JsonFileRepository;
