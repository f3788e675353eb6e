//! Implements the `!help` command.

use tracing::instrument;

use crate::Context;
use crate::WardenError;

/// Static list of every verb the bot answers to.
pub(crate) const HELP: &str = "\
Here are the commands you can use:
- `!help`: show this list.
- `!rename <name>`: change the server name.
- `!ban-one <username or id>`: ban the given member.
- `!broadcast-invite`: send the invite link to every text channel.
- `!ban-all`: ban every non-bot member except operators.
- `!timeout-all`: time out every non-bot member except operators for 7 days.
- `!grant-admin-role`: create an administrator role and assign it to you.
- `!rename-via-button`: post a button that renames the server.
- `!list-servers`: DM you every server I'm in, with join links.
- `!unban <user id>`: lift a ban by user id.";

/// Shows every available command.
#[instrument(skip(ctx))]
#[poise::command(prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), WardenError> {
    ctx.reply(HELP).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use crate::setup::PREFIX;

    #[test]
    fn help_lists_every_registered_command() {
        for command in commands::list() {
            let verb = format!("`{PREFIX}{}", command.name);
            assert!(HELP.contains(&verb), "help text is missing {verb}");
        }
    }
}
