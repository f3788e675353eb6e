//! Implements the `!list-servers` command.
//!
//! Compiles one line per guild the bot is in, each with a short-lived
//! single-use join link, and delivers the list by DM. Per-guild invite
//! failures degrade to a placeholder line instead of failing the command.

use itertools::Itertools;
use tracing::error;
use tracing::instrument;
use tracing::warn;

use crate::serenity::ChannelType;
use crate::serenity::CreateInvite;
use crate::serenity::CreateMessage;
use crate::serenity::GuildId;
use crate::Context;
use crate::WardenError;

/// Invite lifetime in seconds.
const INVITE_MAX_AGE: u32 = 86_400;

/// DM the invoker every server the bot is in, with join links.
#[instrument(skip(ctx))]
#[poise::command(prefix_command, rename = "list-servers")]
pub async fn list_servers(ctx: Context<'_>) -> Result<(), WardenError> {
    let guilds: Vec<GuildId> = ctx.serenity_context().cache.guilds();

    let mut lines = Vec::with_capacity(guilds.len());
    for guild_id in guilds {
        let name = guild_id
            .name(ctx)
            .unwrap_or_else(|| format!("guild {guild_id}"));
        let link = match mint_invite(&ctx, guild_id).await {
            Ok(Some(url)) => url,
            Ok(None) => "no text channel to invite through".to_string(),
            Err(e) => {
                warn!("Could not create invite for '{name}': {e}");
                "could not create an invite link".to_string()
            }
        };
        lines.push(format!("**{name}**: {link}"));
    }

    let list = lines.iter().join("\n");
    let dm = CreateMessage::new().content(format!("Here are the servers I'm in:\n{list}"));

    match ctx.author().id.direct_message(ctx, dm).await {
        Ok(_) => {
            ctx.say("I've sent you the server list via DM.").await?;
        }
        Err(e) => {
            error!("Failed to deliver server list DM: {e}");
            ctx.say("Could not deliver the server list via DM.").await?;
        }
    }

    Ok(())
}

/// Mint a 1-day single-use invite through the guild's first text channel.
/// Returns `None` when the guild has no text channel at all.
async fn mint_invite(ctx: &Context<'_>, guild_id: GuildId) -> Result<Option<String>, WardenError> {
    let channels = guild_id.channels(ctx).await?;

    let Some(channel) = channels
        .into_values()
        .find(|channel| channel.kind == ChannelType::Text)
    else {
        return Ok(None);
    };

    let invite = channel
        .id
        .create_invite(
            ctx,
            CreateInvite::new().max_age(INVITE_MAX_AGE).max_uses(1),
        )
        .await?;

    Ok(Some(invite.url()))
}
