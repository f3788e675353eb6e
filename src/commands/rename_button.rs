//! Implements the `!rename-via-button` command.
//!
//! Only posts the button. Clicks come back as component interactions and
//! are handled in [crate::events], where the clicker is re-checked against
//! the operator allow-list.

use tracing::error;
use tracing::instrument;

use crate::serenity::ButtonStyle;
use crate::serenity::CreateActionRow;
use crate::serenity::CreateButton;
use crate::serenity::CreateMessage;
use crate::Context;
use crate::WardenError;

/// Component id the rename button reports back with.
pub(crate) const RENAME_BUTTON_ID: &str = "rename-server";

/// Post a button that renames the server when clicked.
#[instrument(skip(ctx))]
#[poise::command(prefix_command, rename = "rename-via-button", guild_only)]
pub async fn rename_via_button(ctx: Context<'_>) -> Result<(), WardenError> {
    let button = CreateButton::new(RENAME_BUTTON_ID)
        .label("Rename Server")
        .style(ButtonStyle::Primary);
    let row = CreateActionRow::Buttons(vec![button]);
    let message = CreateMessage::new()
        .content("Click the button to rename this server:")
        .components(vec![row]);

    if let Err(e) = ctx.channel_id().send_message(ctx, message).await {
        error!("Failed to post rename button: {e}");
        ctx.say("Failed to post the button. Check my permissions.")
            .await?;
    }

    Ok(())
}
