use game_core::{PlayerId, StoryOutcome, resolve_story};

use super::{CommandContext, CommandError, CommandResult, Reply};

pub(super) fn handle(ctx: &mut CommandContext<'_>, player: PlayerId) -> CommandResult {
    let mut roster = ctx.repository.load()?;

    let mut character = roster
        .get(&player)
        .cloned()
        .ok_or_else(|| CommandError::CharacterNotFound {
            player: player.clone(),
        })?;

    let outcome = resolve_story(&mut character)?;
    roster.put(player.clone(), character.clone());
    ctx.repository.save(&roster)?;

    match outcome {
        StoryOutcome::Cleared {
            enemy,
            experience_gained,
            leveled_up,
            ..
        } => tracing::info!(
            %player,
            chapter = enemy.chapter,
            experience_gained,
            leveled_up,
            "story chapter cleared"
        ),
        StoryOutcome::Defeated { enemy, .. } => {
            tracing::info!(%player, chapter = enemy.chapter, "story chapter lost")
        }
    }

    Ok(Reply::Story {
        player,
        outcome,
        character,
    })
}
