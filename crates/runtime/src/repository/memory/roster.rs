//! In-memory PlayerRepository implementation for tests and local runs.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use game_core::Roster;

use crate::repository::{PlayerRepository, RepositoryError, Result};

/// Keeps the roster in memory. Nothing survives the process.
#[derive(Default)]
pub struct InMemoryRepository {
    roster: RwLock<Roster>,
    saves: AtomicUsize,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an existing roster.
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster: RwLock::new(roster),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl PlayerRepository for InMemoryRepository {
    fn load(&self) -> Result<Roster> {
        let roster = self
            .roster
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(roster.clone())
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        let mut current = self
            .roster
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = roster.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Character, CharacterClass, PlayerId};

    use super::*;

    #[test]
    fn starts_empty_and_round_trips() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().unwrap().is_empty());

        let mut roster = Roster::new();
        roster.put(PlayerId::from("1"), Character::new(CharacterClass::Mage));
        repo.save(&roster).unwrap();

        assert_eq!(repo.load().unwrap(), roster);
        assert_eq!(repo.save_count(), 1);
    }

    #[test]
    fn put_many_updates_roster_and_store_together() {
        let repo = InMemoryRepository::new();
        let mut roster = repo.load().unwrap();
        let mut winner = Character::new(CharacterClass::Warrior);
        winner.rating = 1016;
        let mut loser = Character::new(CharacterClass::Assassin);
        loser.rating = 984;

        repo.put_many(
            &mut roster,
            vec![(PlayerId::from("a"), winner), (PlayerId::from("b"), loser)],
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(repo.load().unwrap(), roster);
        assert_eq!(repo.save_count(), 1);
    }
}
