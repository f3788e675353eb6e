//! Shared state handed to every command invocation.

use std::collections::HashSet;

use crate::serenity::UserId;

/// The data kept between shards.
///
/// Everything here is read-only after startup; commands hold no mutable
/// process state between invocations.
#[derive(Debug)]
pub struct Data {
    /// Users allowed to issue commands. Everyone else is silently ignored.
    pub allow_list: HashSet<UserId>,
    /// List of users to send bug notifications.
    pub notify_list: HashSet<UserId>,
    /// Invite link posted by `broadcast-invite`.
    pub invite_link: String,
    /// Name applied to the server by the rename button.
    pub button_rename_to: String,
}

impl Data {
    /// Whether `user` may issue commands and click privileged buttons.
    pub fn is_operator(&self, user: UserId) -> bool {
        self.allow_list.contains(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with_operator(id: u64) -> Data {
        Data {
            allow_list: HashSet::from([UserId::new(id)]),
            notify_list: HashSet::new(),
            invite_link: "https://discord.gg/abc".to_string(),
            button_rename_to: "Renamed".to_string(),
        }
    }

    #[test]
    fn operator_check_matches_allow_list_only() {
        let data = data_with_operator(42);
        assert!(data.is_operator(UserId::new(42)));
        assert!(!data.is_operator(UserId::new(43)));
    }
}
