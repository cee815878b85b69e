use game_core::{DuelSide, PlayerId, resolve_duel};

use super::{CommandContext, CommandError, CommandResult, InvalidTarget, Reply};

pub(super) fn handle(
    ctx: &mut CommandContext<'_>,
    challenger: PlayerId,
    opponent: PlayerId,
) -> CommandResult {
    let mut roster = ctx.repository.load()?;

    let mut attacker = roster
        .get(&challenger)
        .cloned()
        .ok_or_else(|| CommandError::CharacterNotFound {
            player: challenger.clone(),
        })?;

    if challenger == opponent {
        return Err(CommandError::InvalidTarget(InvalidTarget::SelfDuel));
    }

    let mut defender = roster
        .get(&opponent)
        .cloned()
        .ok_or_else(|| CommandError::InvalidTarget(InvalidTarget::NoCharacter(opponent.clone())))?;

    let outcome = resolve_duel(&mut attacker, &mut defender, &mut *ctx.rng)?;

    // Both records go out in one save so ratings never diverge.
    ctx.repository.put_many(
        &mut roster,
        vec![
            (challenger.clone(), attacker),
            (opponent.clone(), defender),
        ],
    )?;

    let winner = match outcome.winner {
        DuelSide::Challenger => &challenger,
        DuelSide::Defender => &opponent,
    };
    tracing::info!(
        %challenger,
        %opponent,
        %winner,
        turns = outcome.turns,
        challenger_rating = outcome.challenger_rating.after,
        opponent_rating = outcome.defender_rating.after,
        "duel resolved"
    );

    Ok(Reply::Duel {
        challenger,
        defender: opponent,
        outcome,
    })
}
