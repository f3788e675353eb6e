//! Bot commands.

mod ban_all;
mod ban_one;
mod broadcast_invite;
mod grant_admin_role;
mod help;
mod list_servers;
mod rename;
pub(crate) mod rename_button;
mod timeout_all;
mod unban;

use std::collections::HashSet;

use crate::serenity::UserId;
use crate::{Data, WardenError};

/// Convenient type alias for [poise::Command].
pub type Command = poise::Command<Data, WardenError>;

/// Audit log reason attached to every moderation call this bot makes.
pub(crate) const ACTION_REASON: &str = "warden-bot operator command";

/// Lists all the implemented commands
pub fn list() -> Vec<Command> {
    vec![
        help::help(),
        rename::rename(),
        ban_one::ban_one(),
        broadcast_invite::broadcast_invite(),
        ban_all::ban_all(),
        timeout_all::timeout_all(),
        grant_admin_role::grant_admin_role(),
        rename_button::rename_via_button(),
        list_servers::list_servers(),
        unban::unban(),
    ]
}

/// Whether a member is swept by `ban-all`/`timeout-all`.
/// Bots and operators are always spared.
pub(crate) fn eligible_for_sweep(
    is_bot: bool,
    user: UserId,
    allow_list: &HashSet<UserId>,
) -> bool {
    !is_bot && !allow_list.contains(&user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_spares_bots_and_operators() {
        let allow_list = HashSet::from([UserId::new(1)]);

        assert!(eligible_for_sweep(false, UserId::new(2), &allow_list));
        assert!(!eligible_for_sweep(true, UserId::new(2), &allow_list));
        assert!(!eligible_for_sweep(false, UserId::new(1), &allow_list));
    }

    #[test]
    fn every_command_has_a_distinct_name() {
        let commands = list();
        let mut names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), commands.len());
    }
}
