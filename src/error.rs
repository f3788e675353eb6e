//! Error taxonomy for the bot.
//!
//! [UserError] covers everything a command invoker did wrong and is shown
//! to them as-is. [WardenError] is the top-level error threaded through the
//! command framework. [ConfigError] only occurs during startup.

use thiserror::Error;

use crate::serenity;

/// Top-level error for the command framework and startup path.
#[derive(Error, Debug)]
pub enum WardenError {
    /// The invoker did something wrong. Shown to them verbatim.
    #[error(transparent)]
    User(#[from] UserError),

    /// Startup configuration was missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Discord API rejected a call.
    #[error("Discord API error: {0}")]
    Serenity(#[from] serenity::Error),

    /// A command handler panicked.
    #[error("Command panicked: {payload:?}")]
    Panic { payload: Option<String> },
}

/// Errors caused by how a command was invoked.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("Could not understand `{}`. See `!help` for usage.", .input.as_deref().unwrap_or("that input"))]
    BadArgs { input: Option<String> },

    #[error("This command only works in a server.")]
    GuildOnly,

    #[error("No member found matching `{query}`.")]
    MemberNotFound { query: String },

    #[error("`{input}` is not a valid user id.")]
    MalformedUserId { input: String },

    #[error("I'm missing the following permissions: {missing}.")]
    MissingBotPermissions { missing: serenity::Permissions },
}

/// Errors while reading or writing the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("No config file found. {action_msg}")]
    MissingConfig { action_msg: String },

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
