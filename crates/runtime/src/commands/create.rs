use game_core::{Character, PlayerId};

use super::{CommandContext, CommandError, CommandResult, Reply};

pub(super) fn handle(ctx: &mut CommandContext<'_>, player: PlayerId, class: &str) -> CommandResult {
    let mut roster = ctx.repository.load()?;

    if roster.exists(&player) {
        return Err(CommandError::DuplicateCharacter { player });
    }

    let character = Character::create(class)?;
    roster.put(player.clone(), character.clone());
    ctx.repository.save(&roster)?;

    tracing::info!(%player, class = %character.class, "character created");

    Ok(Reply::Created { player, character })
}
