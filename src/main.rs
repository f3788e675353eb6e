//! A single-operator administration bot.
//!
//! Listens for prefixed chat commands from allow-listed operators and runs
//! moderation actions against the current guild. Also serves a tiny HTTP
//! liveness endpoint so hosting platforms can probe the process.

mod batch;
mod commands;
mod data;
mod error;
mod events;
mod log;
mod setup;
mod web;

pub(crate) use poise::serenity_prelude as serenity;

pub use data::Data;
pub use error::UserError;
pub use error::WardenError;
pub use setup::Config;

/// Convenient type alias, only this [poise::Context] type is used.
pub type Context<'a> = poise::Context<'a, Data, WardenError>;

#[tokio::main]
async fn main() -> Result<(), WardenError> {
    let config = Config::read()?;

    // Keep the guard alive so file logs keep flushing.
    let _log_guard = log::install_tracing(&config);

    // The liveness endpoint lives and dies on its own; the bot keeps
    // running either way.
    tokio::spawn(web::run_health_server(config.health_port()));

    let mut client = setup::client(config).await?;
    client.start().await?;

    Ok(())
}
