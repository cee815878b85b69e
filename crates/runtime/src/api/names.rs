//! Asynchronous abstraction for turning player ids into display names.
//!
//! The ranking only stores ids; transports plug in a [`NameResolver`] backed
//! by whatever the chat platform offers (user lookups, a member cache, ...).
//! Resolution happens on the caller's task, after the command worker has
//! replied, so slow lookups never hold up other commands.
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use game_core::{LeaderboardEntry, PlayerId};

/// Trait for looking up a player's current display name.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Returns `None` when the platform does not know the id.
    async fn display_name(&self, player: &PlayerId) -> Option<String>;
}

/// Names remembered from previously seen messages.
#[derive(Default)]
pub struct NameDirectory {
    names: RwLock<HashMap<PlayerId, String>>,
}

impl NameDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember (or refresh) the display name for `player`.
    pub fn remember(&self, player: PlayerId, name: impl Into<String>) {
        let mut names = self.names.write().unwrap_or_else(|poisoned| {
            tracing::warn!("name directory lock poisoned; keeping recovered entries");
            poisoned.into_inner()
        });
        names.insert(player, name.into());
    }
}

#[async_trait]
impl NameResolver for NameDirectory {
    async fn display_name(&self, player: &PlayerId) -> Option<String> {
        self.names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(player)
            .cloned()
    }
}

/// A ranking line ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedPlayer {
    pub rank: usize,
    pub name: String,
    pub rating: i32,
}

/// Resolves every leaderboard entry to a display name, in order.
///
/// Unknown ids fall back to `player <id>`.
pub async fn resolve_ranking(
    resolver: &dyn NameResolver,
    entries: &[LeaderboardEntry],
) -> Vec<RankedPlayer> {
    let mut ranked = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = match resolver.display_name(&entry.player_id).await {
            Some(name) => name,
            None => {
                tracing::debug!(player = %entry.player_id, "no display name known");
                format!("player {}", entry.player_id)
            }
        };
        ranked.push(RankedPlayer {
            rank: entry.rank,
            name,
            rating: entry.rating,
        });
    }
    ranked
}
