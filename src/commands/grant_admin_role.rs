//! Implements the `!grant-admin-role` command.

use tracing::error;
use tracing::info;
use tracing::instrument;

use crate::error::UserError;
use crate::serenity::EditRole;
use crate::serenity::Permissions;
use crate::Context;
use crate::WardenError;

/// Name of the role this command creates.
const ROLE_NAME: &str = "AdminRole";

/// Create a role with administrator permissions and assign it to the
/// invoking operator.
#[instrument(skip(ctx))]
#[poise::command(
    prefix_command,
    rename = "grant-admin-role",
    guild_only,
    required_bot_permissions = "MANAGE_ROLES"
)]
pub async fn grant_admin_role(ctx: Context<'_>) -> Result<(), WardenError> {
    let guild_id = ctx.guild_id().ok_or(UserError::GuildOnly)?;
    let operator = ctx.author().id;

    // Fetch the member record up front; a missing one gets its own reply.
    let member = match guild_id.member(ctx, operator).await {
        Ok(member) => member,
        Err(e) => {
            error!("Could not fetch member record for {operator}: {e}");
            ctx.say("Could not find your member record in this server.")
                .await?;
            return Ok(());
        }
    };

    let builder = EditRole::new()
        .name(ROLE_NAME)
        .permissions(Permissions::ADMINISTRATOR);
    let role = match guild_id.create_role(ctx, builder).await {
        Ok(role) => role,
        Err(e) => {
            error!("Failed to create role '{ROLE_NAME}': {e}");
            ctx.say("Failed to create the role. Check my permissions.")
                .await?;
            return Ok(());
        }
    };

    match member.add_role(ctx, role.id).await {
        Ok(()) => {
            let role_name = &role.name;
            info!("Created role '{role_name}' and assigned it to {operator}.");
            ctx.say(format!(
                "Created role **{role_name}** and assigned it to <@{operator}>."
            ))
            .await?;
        }
        Err(e) => {
            error!("Failed to assign role '{ROLE_NAME}': {e}");
            ctx.say("I don't have permission to assign that role.")
                .await?;
        }
    }

    Ok(())
}
