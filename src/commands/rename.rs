//! Implements the `!rename` command.
//!
//! Everything after the verb, spaces included, becomes the new server name.

use tracing::error;
use tracing::instrument;

use crate::error::UserError;
use crate::serenity::EditGuild;
use crate::Context;
use crate::WardenError;

/// Change the server name.
#[instrument(skip(ctx))]
#[poise::command(prefix_command, guild_only, required_bot_permissions = "MANAGE_GUILD")]
pub async fn rename(
    ctx: Context<'_>,
    #[rest]
    #[description = "New server name"]
    name: String,
) -> Result<(), WardenError> {
    let guild_id = ctx.guild_id().ok_or(UserError::GuildOnly)?;

    match guild_id.edit(ctx, EditGuild::new().name(&name)).await {
        Ok(_) => {
            ctx.say(format!("Server name changed to **{name}**.")).await?;
        }
        Err(e) => {
            error!("Failed to change server name: {e}");
            ctx.say("Failed to change the server name. Check my permissions.")
                .await?;
        }
    }

    Ok(())
}
