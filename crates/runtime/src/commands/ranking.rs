use game_core::GameConfig;

use super::{CommandContext, CommandResult, Reply};

pub(super) fn handle(ctx: &mut CommandContext<'_>) -> CommandResult {
    let roster = ctx.repository.load()?;
    let entries = roster.leaderboard(GameConfig::LEADERBOARD_SIZE);

    tracing::debug!(
        players = roster.len(),
        shown = entries.len(),
        "ranking built"
    );

    Ok(Reply::Ranking { entries })
}
