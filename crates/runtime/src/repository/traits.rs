//! Repository contract for loading and saving the player roster.

use game_core::{Character, PlayerId, Roster};

use super::error::Result;

/// Durable store for the whole roster.
///
/// The roster is always read and written in full: commands load it, mutate
/// the in-memory copy, and save it back. Implementations only need
/// "last full write wins" semantics; callers are expected to serialize
/// load-mutate-save cycles (the runtime's command worker does).
pub trait PlayerRepository: Send + Sync {
    /// Load the roster. An absent store yields an empty roster; unreadable
    /// data fails with [`RepositoryError::CorruptState`](super::RepositoryError::CorruptState).
    fn load(&self) -> Result<Roster>;

    /// Overwrite the persisted roster.
    fn save(&self, roster: &Roster) -> Result<()>;

    /// Apply several records as one batch and persist them with a single save.
    ///
    /// On failure `roster` is left untouched, so either every record in the
    /// batch is updated or none is.
    fn put_many(&self, roster: &mut Roster, records: Vec<(PlayerId, Character)>) -> Result<()> {
        let mut staged = roster.clone();
        staged.put_many(records);
        self.save(&staged)?;
        *roster = staged;
        Ok(())
    }
}
