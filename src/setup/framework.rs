//! Setup for [poise::Framework]

use crate::commands;
use crate::events;
use crate::serenity;
use crate::Config;
use crate::Data;
use crate::WardenError;

/// Convenient type alias, only this [poise::Framework] type is used.
type Framework = poise::Framework<Data, WardenError>;

/// Prefix every command verb is invoked with.
pub const PREFIX: &str = "!";

/// Construct a [poise::Framework]
pub(super) fn framework(config: Config) -> Framework {
    poise::Framework::builder()
        .options(framework_options())
        .setup(|ctx, rdy, fw| framework_setup(ctx, rdy, fw, config))
        .build()
}

/// Configure options for the [Framework]
fn framework_options() -> poise::FrameworkOptions<Data, WardenError> {
    poise::FrameworkOptions {
        // Add commands to the framework
        commands: commands::list(),
        // Handle framework errors
        on_error: |e| crate::log::handle_framework_error(e),
        // Every command is operator-only. Non-operators are silently
        // ignored, they never learn the bot is listening.
        command_check: Some(|ctx| {
            Box::pin(async move { Ok(ctx.data().is_operator(ctx.author().id)) })
        }),
        // Button clicks arrive as component interactions, outside the
        // command dispatch path.
        event_handler: |ctx, event, _fw, data| Box::pin(events::dispatch(ctx, event, data)),
        // Log when commands start
        pre_command: |ctx| {
            Box::pin(async move {
                let cmd_name = &ctx.command().name;
                let user = &ctx.author();
                tracing::info!("Started '{cmd_name}' command from {user}.")
            })
        },
        // Log when finishing commands
        post_command: |ctx| {
            Box::pin(async move {
                let cmd_name = &ctx.command().name;
                let user = &ctx.author();
                tracing::info!("Finished '{cmd_name}' command from {user}.")
            })
        },
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(PREFIX.to_string()),
            // Verbs are matched case-insensitively; bots are ignored by
            // default.
            case_insensitive_commands: true,
            mention_as_prefix: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Construct future that runs on startup
fn framework_setup<'a>(
    _ctx: &'a serenity::Context,
    rdy: &'a serenity::Ready,
    fw: &'a Framework,
    config: Config,
) -> poise::BoxFuture<'a, Result<Data, WardenError>> {
    Box::pin(async move {
        // Simple message that logs when the bot has initialized
        let bot_name = &rdy.user.name;
        tracing::info!("{bot_name} is ready!");

        let allow_list = config.allow_list();
        if allow_list.is_empty() {
            tracing::warn!("Operator allow-list is empty. Nobody can command this bot.");
        }

        let notify_list = config.notify_list(fw);

        let data = Data {
            allow_list,
            notify_list,
            invite_link: config.invite_link().to_string(),
            button_rename_to: config.button_rename_to().to_string(),
        };

        Ok(data)
    })
}
