//! Combat resolution system.
//!
//! - `resolve_story`: deterministic chapter fight against a scripted enemy
//! - `resolve_duel`: turn-based duel between two characters, randomized
//!   through a caller-supplied [`rand::Rng`] so seeded runs replay exactly
//!
//! Both resolvers refuse combatants without positive damage, which is what
//! keeps their loops finite.

mod duel;
mod error;
mod story;

pub use duel::{DuelOutcome, DuelSide, RatingChange, resolve_duel};
pub use error::CombatError;
pub use story::{Enemy, StoryOutcome, resolve_story};
