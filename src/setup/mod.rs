//! Defines and implements custom bot functionality.

mod config;
mod framework;

use crate::serenity;
use crate::WardenError;

pub use config::Config;
pub use framework::PREFIX;

/// Constructs a [serenity::Client] running the command framework.
pub(super) async fn client(config: Config) -> Result<serenity::Client, WardenError> {
    // Get discord token from config file
    let token = config.token()?.clone();

    // Intents we wish to use.
    // Guild members and message content are privileged and must also be
    // enabled on the developer portal.
    // See https://discord.com/developers/docs/topics/gateway#gateway-intents
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let client = serenity::ClientBuilder::new(token, intents)
        .framework(framework::framework(config))
        .await?;

    Ok(client)
}
