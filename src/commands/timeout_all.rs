//! Implements the `!timeout-all` command.
//!
//! Same sweep as `ban-all`, but members get a fixed 7-day timeout instead
//! of a ban.

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use tracing::info;
use tracing::instrument;

use crate::batch;
use crate::commands::eligible_for_sweep;
use crate::error::UserError;
use crate::serenity::EditMember;
use crate::serenity::Timestamp;
use crate::serenity::UserId;
use crate::Context;
use crate::WardenError;

/// How long a swept member stays timed out, in seconds.
const TIMEOUT_SECS: u64 = 7 * 24 * 60 * 60;

/// Time out every non-bot member except operators for 7 days.
#[instrument(skip(ctx))]
#[poise::command(
    prefix_command,
    rename = "timeout-all",
    guild_only,
    required_bot_permissions = "MODERATE_MEMBERS"
)]
pub async fn timeout_all(ctx: Context<'_>) -> Result<(), WardenError> {
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
    info!("Timing out {count} members.");

    let now_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let edit = EditMember::new().disable_communication_until_datetime(timeout_expiry(now_secs));

    let timeouts = targets
        .into_iter()
        .map(|(tag, id)| (tag, guild_id.edit_member(ctx, id, edit.clone())))
        .collect();

    let outcome = batch::settle(timeouts).await;

    ctx.say(outcome.summary("Timed out", "members")).await?;

    Ok(())
}

/// Expiry timestamp for a timeout starting at `now_secs` unix seconds.
fn timeout_expiry(now_secs: u64) -> Timestamp {
    let until = (now_secs + TIMEOUT_SECS) as i64;
    Timestamp::from_unix_timestamp(until).unwrap_or_else(|_| Timestamp::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_seven_days_out() {
        let now = 1_700_000_000;
        let expiry = timeout_expiry(now);
        assert_eq!(expiry.unix_timestamp(), now as i64 + 604_800);
    }
}
