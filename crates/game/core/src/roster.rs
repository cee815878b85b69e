//! Ordered mapping from player id to character.
//!
//! The roster keeps records in insertion order, which is also the order they
//! appear in the persisted JSON object. Leaderboard ties fall back to that
//! order.

use std::collections::HashMap;

use crate::character::{Character, PlayerId};

/// All characters known to the arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(PlayerId, Character)>,
    index: HashMap<PlayerId, usize>,
}

/// One line of the global ranking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub player_id: PlayerId,
    pub rating: i32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn exists(&self, id: &PlayerId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Character> {
        self.index.get(id).map(|&slot| &self.entries[slot].1)
    }

    pub fn get_mut(&mut self, id: &PlayerId) -> Option<&mut Character> {
        let slot = *self.index.get(id)?;
        Some(&mut self.entries[slot].1)
    }

    /// Inserts or replaces a record. Replacing keeps the original position.
    pub fn put(&mut self, id: PlayerId, character: Character) {
        match self.index.get(&id) {
            Some(&slot) => self.entries[slot].1 = character,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, character));
            }
        }
    }

    /// Applies several records at once.
    pub fn put_many(&mut self, records: impl IntoIterator<Item = (PlayerId, Character)>) {
        for (id, character) in records {
            self.put(id, character);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &Character)> {
        self.entries.iter().map(|(id, character)| (id, character))
    }

    /// Top `limit` characters by rating, highest first.
    ///
    /// The sort is stable: equal ratings keep roster order.
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.rating.cmp(&a.rating));

        ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(position, (id, character))| LeaderboardEntry {
                rank: position + 1,
                player_id: id.clone(),
                rating: character.rating,
            })
            .collect()
    }
}

impl FromIterator<(PlayerId, Character)> for Roster {
    fn from_iter<I: IntoIterator<Item = (PlayerId, Character)>>(iter: I) -> Self {
        let mut roster = Self::new();
        roster.put_many(iter);
        roster
    }
}

// Serialized as a plain JSON object so rosters stay readable and compatible
// with files written by hand or by earlier versions of the bot.
#[cfg(feature = "serde")]
impl serde::Serialize for Roster {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RosterVisitor;

        impl<'de> serde::de::Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an object mapping player ids to characters")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut roster = Roster::new();
                // Duplicate keys: the last value wins, the first position is kept.
                while let Some((id, character)) = map.next_entry::<PlayerId, Character>()? {
                    roster.put(id, character);
                }
                Ok(roster)
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}
