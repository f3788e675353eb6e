//! Implements the `!unban` command.

use tracing::error;
use tracing::info;
use tracing::instrument;

use crate::error::UserError;
use crate::serenity::UserId;
use crate::Context;
use crate::WardenError;

/// Lift a ban by user id.
#[instrument(skip(ctx))]
#[poise::command(prefix_command, guild_only, required_bot_permissions = "BAN_MEMBERS")]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "User id to unban"] user_id: String,
) -> Result<(), WardenError> {
    let guild_id = ctx.guild_id().ok_or(UserError::GuildOnly)?;

    // Validate before touching the API; a bad id never leaves the process.
    let target = parse_user_id(&user_id)
        .ok_or(UserError::MalformedUserId { input: user_id })?;

    match guild_id.unban(ctx, target).await {
        Ok(()) => {
            info!("Unbanned {target}.");
            ctx.say(format!("User with id **{target}** has been unbanned."))
                .await?;
        }
        Err(e) => {
            error!("Failed to unban {target}: {e}");
            ctx.say("Failed to unban. Check the user id and my permissions.")
                .await?;
        }
    }

    Ok(())
}

/// A user id is a nonzero decimal snowflake.
fn parse_user_id(input: &str) -> Option<UserId> {
    input
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_decimal_snowflakes() {
        assert_eq!(parse_user_id("982273229001465887"), Some(UserId::new(982273229001465887)));
    }

    #[test]
    fn rejects_garbage_and_zero() {
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("-5"), None);
        assert_eq!(parse_user_id("0"), None);
    }
}
