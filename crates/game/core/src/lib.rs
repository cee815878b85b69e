//! Deterministic game rules shared by the arena bot runtime.
//!
//! `game-core` defines the canonical rules of the arena: character classes and
//! progression, story (PvE) and duel (PvP) resolution, and the Elo rating
//! ladder. Everything here is pure: no I/O, and randomness only through an
//! injected [`rand::Rng`]. The runtime crate layers persistence and command
//! handling on top of the types re-exported here.
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod rating;
pub mod roster;

pub use character::{Character, CharacterClass, CharacterError, ClassTemplate, PlayerId};
pub use combat::{
    CombatError, DuelOutcome, DuelSide, Enemy, RatingChange, StoryOutcome, resolve_duel,
    resolve_story,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use rating::{MatchResult, RatingUpdate, expected_score, new_rating};
pub use roster::{LeaderboardEntry, Roster};
