//! Implements the `!ban-all` command.
//!
//! Bans every non-bot member that is not an operator. One rejected ban
//! never aborts the sweep; the reply reports the real counts.

use tracing::info;
use tracing::instrument;

use crate::batch;
use crate::commands::eligible_for_sweep;
use crate::commands::ACTION_REASON;
use crate::error::UserError;
use crate::serenity::UserId;
use crate::Context;
use crate::WardenError;

/// Ban every non-bot member except operators.
#[instrument(skip(ctx))]
#[poise::command(
    prefix_command,
    rename = "ban-all",
    guild_only,
    required_bot_permissions = "BAN_MEMBERS"
)]
pub async fn ban_all(ctx: Context<'_>) -> Result<(), WardenError> {
    let guild_id = ctx.guild_id().ok_or(UserError::GuildOnly)?;
    let allow_list = &ctx.data().allow_list;

    let targets: Vec<(String, UserId)> = {
        let guild = ctx.guild().ok_or(UserError::GuildOnly)?;
        guild
            .members
            .values()
            .filter(|member| eligible_for_sweep(member.user.bot, member.user.id, allow_list))
            .map(|member| (member.user.tag(), member.user.id))
            .collect()
    };

    let count = targets.len();
    info!("Banning {count} members.");

    let bans = targets
        .into_iter()
        .map(|(tag, id)| (tag, guild_id.ban_with_reason(ctx, id, 0, ACTION_REASON)))
        .collect();

    let outcome = batch::settle(bans).await;

    ctx.say(outcome.summary("Banned", "members")).await?;

    Ok(())
}
