//! Implements the `!broadcast-invite` command.
//!
//! Posts the configured invite link to every text channel concurrently and
//! reports how many sends actually landed.

use tracing::instrument;

use crate::batch;
use crate::error::UserError;
use crate::serenity::ChannelId;
use crate::serenity::ChannelType;
use crate::Context;
use crate::WardenError;

/// Send the invite link to every text channel.
#[instrument(skip(ctx))]
#[poise::command(prefix_command, rename = "broadcast-invite", guild_only)]
pub async fn broadcast_invite(ctx: Context<'_>) -> Result<(), WardenError> {
    let guild_id = ctx.guild_id().ok_or(UserError::GuildOnly)?;

    let message = format!("Join our server: {}", ctx.data().invite_link);

    let channels: Vec<(String, ChannelId)> = guild_id
        .channels(ctx)
        .await?
        .into_values()
        .filter(|channel| channel.kind == ChannelType::Text)
        .map(|channel| (channel.name.clone(), channel.id))
        .collect();

    let sends = channels
        .into_iter()
        .map(|(name, id)| (name, id.say(ctx, message.clone())))
        .collect();

    let outcome = batch::settle(sends).await;

    ctx.say(outcome.summary("Sent the invite link to", "text channels"))
        .await?;

    Ok(())
}
