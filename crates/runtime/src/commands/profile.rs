use game_core::PlayerId;

use super::{CommandContext, CommandError, CommandResult, Reply};

pub(super) fn handle(ctx: &mut CommandContext<'_>, player: PlayerId) -> CommandResult {
    let roster = ctx.repository.load()?;

    let character = roster
        .get(&player)
        .cloned()
        .ok_or_else(|| CommandError::CharacterNotFound {
            player: player.clone(),
        })?;

    Ok(Reply::Profile { player, character })
}
