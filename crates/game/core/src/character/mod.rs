//! Character model: classes, creation templates, and progression.
//!
//! A [`Character`] is created once per [`PlayerId`] from a
//! [`CharacterClass`] template and then only changes through story clears
//! (experience, chapter, level) and duels (wins, rating).

mod class;
mod error;
mod id;
mod record;

pub use class::{CharacterClass, ClassTemplate};
pub use error::CharacterError;
pub use id::PlayerId;
pub use record::Character;
