//! Implements the `!ban-one` command.

use tracing::error;
use tracing::info;
use tracing::instrument;

use crate::commands::ACTION_REASON;
use crate::error::UserError;
use crate::serenity::UserId;
use crate::Context;
use crate::WardenError;

/// Ban a single member, matched by exact username or user id.
#[instrument(skip(ctx))]
#[poise::command(
    prefix_command,
    rename = "ban-one",
    guild_only,
    required_bot_permissions = "BAN_MEMBERS"
)]
pub async fn ban_one(
    ctx: Context<'_>,
    #[description = "Exact username or user id"] target: String,
) -> Result<(), WardenError> {
    let guild_id = ctx.guild_id().ok_or(UserError::GuildOnly)?;

    // The cache guard can't be held across an await; copy out what's needed.
    let matched = {
        let guild = ctx.guild().ok_or(UserError::GuildOnly)?;
        guild
            .members
            .values()
            .find(|member| member_matches(&target, &member.user.name, member.user.id))
            .map(|member| (member.user.id, member.user.tag()))
    };

    let Some((user_id, tag)) = matched else {
        return Err(UserError::MemberNotFound { query: target }.into());
    };

    match guild_id
        .ban_with_reason(ctx, user_id, 0, ACTION_REASON)
        .await
    {
        Ok(()) => {
            info!("Banned {tag} ({user_id}).");
            ctx.say(format!("User **{tag}** has been banned.")).await?;
        }
        Err(e) => {
            error!("Failed to ban {tag}: {e}");
            ctx.say("Failed to ban the user. Check my permissions.")
                .await?;
        }
    }

    Ok(())
}

/// Exact match on username or on the id's decimal form.
fn member_matches(needle: &str, username: &str, id: UserId) -> bool {
    username == needle || id.to_string() == needle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_username() {
        assert!(member_matches("alice", "alice", UserId::new(7)));
        assert!(!member_matches("alic", "alice", UserId::new(7)));
        assert!(!member_matches("Alice", "alice", UserId::new(7)));
    }

    #[test]
    fn matches_id_string() {
        assert!(member_matches("7", "alice", UserId::new(7)));
        assert!(!member_matches("8", "alice", UserId::new(7)));
    }
}
