//! Text rendering for replies and errors.
use game_core::{DuelSide, PlayerId, RatingChange, StoryOutcome};
use runtime::{
    CommandError, InvalidTarget, NameResolver, Reply, RuntimeError, resolve_ranking,
};

async fn name_of(resolver: &dyn NameResolver, player: &PlayerId) -> String {
    resolver
        .display_name(player)
        .await
        .unwrap_or_else(|| format!("player {player}"))
}

fn signed(change: &RatingChange) -> String {
    let delta = change.delta();
    if delta >= 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Renders a successful reply.
pub async fn render_reply(reply: &Reply, resolver: &dyn NameResolver) -> String {
    match reply {
        Reply::Created { player, character } => {
            let name = name_of(resolver, player).await;
            format!(
                "🎉 {name} is now {}!",
                character.class.to_string().to_uppercase()
            )
        }
        Reply::Profile { player, character } => {
            let name = name_of(resolver, player).await;
            format!(
                "🧙 {name}\n\
                 Class: {}\n\
                 Level: {}\n\
                 Health: {}/{}\n\
                 Damage: {}\n\
                 XP: {}\n\
                 Story: Chapter {}\n\
                 PvP wins: {}\n\
                 ELO: {}",
                character.class,
                character.level,
                character.health,
                character.max_health,
                character.damage,
                character.experience,
                character.chapter,
                character.wins,
                character.rating,
            )
        }
        Reply::Story { outcome, .. } => render_story(outcome),
        Reply::Duel {
            challenger,
            defender,
            outcome,
        } => {
            let challenger_name = name_of(resolver, challenger).await;
            let defender_name = name_of(resolver, defender).await;
            let winner = match outcome.winner {
                DuelSide::Challenger => &challenger_name,
                DuelSide::Defender => &defender_name,
            };
            format!(
                "⚔ RANKED ⚔\n\
                 {challenger_name} ({} ELO) vs {defender_name} ({} ELO)\n\n\
                 🏆 Winner: {winner}\n\n\
                 {challenger_name}: {} ({})\n\
                 {defender_name}: {} ({})",
                outcome.challenger_rating.before,
                outcome.defender_rating.before,
                outcome.challenger_rating.after,
                signed(&outcome.challenger_rating),
                outcome.defender_rating.after,
                signed(&outcome.defender_rating),
            )
        }
        Reply::Ranking { entries } => {
            let mut message = String::from("🏆 GLOBAL RANKING (ELO)\n");
            if entries.is_empty() {
                message.push_str("\nNo ranked players yet.");
            }
            for line in resolve_ranking(resolver, entries).await {
                message.push_str(&format!("\n{}. {} - {} ELO", line.rank, line.name, line.rating));
            }
            message
        }
    }
}

fn render_story(outcome: &StoryOutcome) -> String {
    let enemy = outcome.enemy();
    let preview = format!(
        "📖 Chapter {}\n👾 Enemy: ❤️ {} | ⚔ {}",
        enemy.chapter, enemy.health, enemy.damage
    );
    match outcome {
        StoryOutcome::Cleared {
            experience_gained,
            leveled_up,
            ..
        } => {
            let mut message = format!("{preview}\n🏆 Chapter cleared! +{experience_gained} XP");
            if *leveled_up {
                message.push_str("\n🎉 You leveled up!");
            }
            message
        }
        StoryOutcome::Defeated { .. } => {
            format!("{preview}\n💀 You have been defeated. Try again.")
        }
    }
}

/// Renders a failed command for the player who issued it.
pub fn render_error(error: &RuntimeError, prefix: &str) -> String {
    let Some(error) = error.as_command_error() else {
        return "⚠ The bot is shutting down, try again later.".to_owned();
    };
    match error {
        CommandError::UnknownClass { available, .. } => {
            format!("Available classes: {available}")
        }
        CommandError::DuplicateCharacter { .. } => "⚠ You already have a character.".to_owned(),
        CommandError::CharacterNotFound { .. } => {
            format!("❌ Create a character first with {prefix}create <class>.")
        }
        CommandError::InvalidTarget(InvalidTarget::SelfDuel) => {
            "You cannot fight yourself.".to_owned()
        }
        CommandError::InvalidTarget(InvalidTarget::NoCharacter(_)) => {
            "Both players need a character.".to_owned()
        }
        CommandError::CorruptState(_) => {
            "⚠ Player data is unreadable. An admin needs to check the store.".to_owned()
        }
        CommandError::Combat(_) | CommandError::Repository(_) => {
            "⚠ Something went wrong, try again later.".to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Character, CharacterClass, DuelOutcome, Enemy, LeaderboardEntry};
    use runtime::NameDirectory;

    fn names() -> NameDirectory {
        let names = NameDirectory::new();
        names.remember("1".into(), "Alice");
        names.remember("2".into(), "Bob");
        names
    }

    #[tokio::test]
    async fn created_and_profile() {
        let character = Character::new(CharacterClass::Mage);
        let created = Reply::Created {
            player: "1".into(),
            character: character.clone(),
        };
        assert_eq!(render_reply(&created, &names()).await, "🎉 Alice is now MAGE!");

        let profile = Reply::Profile {
            player: "9".into(),
            character,
        };
        let text = render_reply(&profile, &names()).await;
        assert!(text.starts_with("🧙 player 9\nClass: mage\nLevel: 1\nHealth: 90/90"));
        assert!(text.ends_with("PvP wins: 0\nELO: 1000"));
    }

    #[test]
    fn story_messages() {
        let enemy = Enemy::for_chapter(1);
        let cleared = StoryOutcome::Cleared {
            enemy,
            rounds: 5,
            experience_gained: 65,
            leveled_up: true,
        };
        assert_eq!(
            render_story(&cleared),
            "📖 Chapter 1\n👾 Enemy: ❤️ 75 | ⚔ 16\n🏆 Chapter cleared! +65 XP\n🎉 You leveled up!"
        );

        let defeated = StoryOutcome::Defeated { enemy, rounds: 3 };
        assert!(render_story(&defeated).ends_with("💀 You have been defeated. Try again."));
    }

    #[tokio::test]
    async fn duel_shows_signed_deltas() {
        let reply = Reply::Duel {
            challenger: "1".into(),
            defender: "2".into(),
            outcome: DuelOutcome {
                winner: DuelSide::Defender,
                turns: 12,
                challenger_rating: RatingChange {
                    before: 1000,
                    after: 984,
                },
                defender_rating: RatingChange {
                    before: 1000,
                    after: 1016,
                },
            },
        };

        assert_eq!(
            render_reply(&reply, &names()).await,
            "⚔ RANKED ⚔\nAlice (1000 ELO) vs Bob (1000 ELO)\n\n🏆 Winner: Bob\n\n\
             Alice: 984 (-16)\nBob: 1016 (+16)"
        );
    }

    #[tokio::test]
    async fn ranking_lines() {
        let reply = Reply::Ranking {
            entries: vec![
                LeaderboardEntry {
                    rank: 1,
                    player_id: "2".into(),
                    rating: 1016,
                },
                LeaderboardEntry {
                    rank: 2,
                    player_id: "3".into(),
                    rating: 984,
                },
            ],
        };
        assert_eq!(
            render_reply(&reply, &names()).await,
            "🏆 GLOBAL RANKING (ELO)\n\n1. Bob - 1016 ELO\n2. player 3 - 984 ELO"
        );

        let empty = Reply::Ranking { entries: vec![] };
        assert!(render_reply(&empty, &names()).await.ends_with("No ranked players yet."));
    }

    #[test]
    fn command_errors() {
        let error = RuntimeError::Command(CommandError::UnknownClass {
            name: "bard".into(),
            available: CharacterClass::available(),
        });
        assert_eq!(
            render_error(&error, "!"),
            "Available classes: warrior, mage, assassin"
        );

        let error = RuntimeError::Command(CommandError::InvalidTarget(InvalidTarget::SelfDuel));
        assert_eq!(render_error(&error, "!"), "You cannot fight yourself.");

        let error = RuntimeError::Command(CommandError::CharacterNotFound { player: "1".into() });
        assert_eq!(
            render_error(&error, "?"),
            "❌ Create a character first with ?create <class>."
        );

        assert!(render_error(&RuntimeError::CommandChannelClosed, "!").contains("shutting down"));
    }
}
