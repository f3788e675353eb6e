//! Gateway events handled outside the command framework.
//!
//! The only one is the rename button: clicks arrive as component
//! interactions and carry no command prefix, so the operator check has to
//! be repeated here. A button sits in a channel where anyone can click it.

use tracing::error;
use tracing::info;
use tracing::warn;

use crate::commands::rename_button::RENAME_BUTTON_ID;
use crate::serenity;
use crate::Data;
use crate::WardenError;

/// Route the events this bot cares about. Wired into
/// [poise::FrameworkOptions::event_handler].
pub async fn dispatch(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    data: &Data,
) -> Result<(), WardenError> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        if component.data.custom_id == RENAME_BUTTON_ID {
            handle_rename_button(ctx, component, data).await?;
        }
    }

    Ok(())
}

/// Rename the server when an operator clicks the button.
///
/// The click itself carries no authorization, so the clicking user is
/// checked against the allow-list before anything happens.
async fn handle_rename_button(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &Data,
) -> Result<(), WardenError> {
    let Some(guild_id) = component.guild_id else {
        return Ok(());
    };

    let clicker = &component.user;
    if !data.is_operator(clicker.id) {
        let name = &clicker.name;
        let id = clicker.id;
        warn!("Denied rename button click from non-operator {name} ({id}).");
        respond_ephemeral(ctx, component, "You are not permitted to do that.").await;
        return Ok(());
    }

    let new_name = &data.button_rename_to;
    match guild_id
        .edit(ctx, serenity::EditGuild::new().name(new_name))
        .await
    {
        Ok(_) => {
            info!("Renamed guild {guild_id} to '{new_name}' via button.");
            respond_ephemeral(ctx, component, format!("Server name changed to **{new_name}**."))
                .await;
        }
        Err(e) => {
            error!("Failed to rename guild {guild_id} via button: {e}");
            respond_ephemeral(
                ctx,
                component,
                "Failed to change the server name. Check my permissions.",
            )
            .await;
        }
    }

    Ok(())
}

/// Acknowledge a component interaction with an ephemeral message.
/// Failures are logged and not retried.
async fn respond_ephemeral(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    content: impl Into<String>,
) {
    let message = serenity::CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    let response = serenity::CreateInteractionResponse::Message(message);

    if let Err(e) = component.create_response(ctx, response).await {
        error!("Failed to respond to button interaction. {e}");
    }
}
