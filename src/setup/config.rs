//! Configuration for running this bot.

use std::collections::HashSet;

use poise::Framework;
use serde::Deserialize;
use serde::Serialize;
use serenity::UserId;
use url::Url;

use crate::error::ConfigError;
use crate::serenity;

/// The path to the config file.
const CONFIG_PATH: &str = "config.toml";

/// Settings read from [CONFIG_PATH] that modify bot behavior.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Token needed to use a bot account.
    discord_token: String,

    /// See [OperatorConfig]
    operators: OperatorConfig,

    /// See [ActionConfig]
    actions: ActionConfig,

    /// See [HealthConfig]
    health: HealthConfig,

    /// See [LoggingConfig]
    logging: LoggingConfig,

    /// Useful developer specific configs.
    dev_utils: DevConfig,
}

impl Config {
    /// Tries to read [CONFIG_PATH] to extract a [Config].
    /// If a file doesn't exists, create the default config file and returns error.
    /// If a file exists but is empty, re-write the default values and return error.
    /// If a file exists but is incomplete or invalid, show error and don't change files.
    /// If a file exists and is complete, read file to create a config.
    /// If file existance is indeterminent (e.g. missing permissions), return error.
    pub fn read() -> Result<Config, ConfigError> {
        let file = std::fs::read_to_string(CONFIG_PATH);

        match file {
            // Config file found
            Ok(content) => {
                // Write default values to file if it's empty.
                if content.trim().is_empty() {
                    write_file(Config::default())?;
                    Err(ConfigError::InvalidConfig {
                        reason: format!("Empty config file! Rewriting {CONFIG_PATH} ..."),
                    })
                } else {
                    let config = Config::parse(&content)?;
                    config.validate()?;
                    Ok(config)
                }
            }
            // File not found or other filesystem error
            Err(file_error) => {
                match file_error.kind() {
                    // If file doesn't exist, create default config file.
                    std::io::ErrorKind::NotFound => {
                        let action = format!("Creating {CONFIG_PATH}...");
                        write_file(Config::default())?;
                        Err(ConfigError::MissingConfig { action_msg: action })
                    }
                    _ => Err(ConfigError::IoError(file_error)),
                }
            }
        }
    }

    /// Deserialize a [Config] from TOML text.
    /// If deserialization fails, the error describes the offending key.
    fn parse(content: &str) -> Result<Config, ConfigError> {
        let to_toml = toml::Deserializer::new(content);
        let result: Result<Config, _> = serde_path_to_error::deserialize(to_toml);

        result.map_err(|error| ConfigError::InvalidConfig {
            reason: error.to_string(),
        })
    }

    /// Checks that values which would only fail deep inside a command are
    /// rejected at startup instead.
    fn validate(&self) -> Result<(), ConfigError> {
        if Url::parse(&self.actions.invite_link).is_err() {
            return Err(ConfigError::InvalidConfig {
                reason: format!("'{}' is not a valid invite url", self.actions.invite_link),
            });
        }

        if self.actions.button_rename_to.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                reason: "button_rename_to must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Basic sanity check for if a token was given.
    pub fn token(&self) -> Result<&String, ConfigError> {
        let default_token = Config::default().discord_token;
        let given_token = &self.discord_token;

        let is_empty = given_token.is_empty();
        let contains_default = given_token.contains(&default_token);

        let sanity_check: bool = !is_empty && !contains_default;

        if sanity_check {
            Ok(&self.discord_token)
        } else {
            Err(ConfigError::InvalidConfig {
                reason: "Missing discord token".to_string(),
            })
        }
    }

    /// The users allowed to issue commands.
    pub fn allow_list(&self) -> HashSet<UserId> {
        self.operators.userids.iter().copied().collect()
    }

    /// Invite link posted by `broadcast-invite`.
    pub fn invite_link(&self) -> &str {
        &self.actions.invite_link
    }

    /// Name the rename button applies to the server.
    pub fn button_rename_to(&self) -> &str {
        &self.actions.button_rename_to
    }

    /// Port the liveness endpoint binds to.
    pub fn health_port(&self) -> u16 {
        self.health.port
    }

    /// Construct a bug notification notify list based on the config.
    /// Wrapper for [NotifyConfig::notify_list]
    pub fn notify_list<U, E>(&self, fw: &Framework<U, E>) -> HashSet<UserId> {
        self.dev_utils.notifications.notify_list(fw)
    }

    /// Getter for log_dir.
    pub fn log_dir(&self) -> &str {
        &self.logging.log_dir
    }

    /// Is debug mode enabled for console logs
    pub fn console_debug(&self) -> bool {
        self.logging.console_debug
    }

    /// Is file logging enabled.
    pub fn logs_enabled(&self) -> bool {
        self.logging.logs_enabled
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discord_token: "put_token_here".to_string(),

            operators: OperatorConfig { userids: vec![] },

            actions: ActionConfig {
                invite_link: "https://discord.gg/put_invite_here".to_string(),
                button_rename_to: "Renamed Server".to_string(),
            },

            health: HealthConfig { port: 3000 },

            logging: LoggingConfig {
                console_debug: false,
                logs_enabled: true,
                log_dir: "logs".to_string(),
            },

            dev_utils: DevConfig {
                notifications: NotifyConfig {
                    enabled: false,
                    add_owners: true,
                    userids: vec![],
                },
            },
        }
    }
}

/// Who is allowed to command the bot.
#[derive(Debug, Serialize, Deserialize)]
struct OperatorConfig {
    /// User ids permitted to issue commands. An empty list locks everyone out.
    userids: Vec<UserId>,
}

/// Fixed inputs for the administrative actions.
#[derive(Debug, Serialize, Deserialize)]
struct ActionConfig {
    /// Invite link `broadcast-invite` posts to every text channel.
    invite_link: String,
    /// Server name applied when the rename button is clicked.
    button_rename_to: String,
}

/// Settings for the liveness endpoint.
#[derive(Debug, Serialize, Deserialize)]
struct HealthConfig {
    /// TCP port for `GET /`.
    port: u16,
}

/// Configs for logging behavior.
#[derive(Debug, Serialize, Deserialize)]
struct LoggingConfig {
    /// Print debug traces to console?
    console_debug: bool,
    /// Enable writing to log file?
    logs_enabled: bool,
    /// Directory to store log files
    log_dir: String,
}

/// Optional configs to enable developer-specific behavior.
#[derive(Debug, Serialize, Deserialize)]
struct DevConfig {
    /// See [NotifyConfig]
    notifications: NotifyConfig,
}

/// Configs for notification behavior when encountering unexpected errors.
#[derive(Debug, Serialize, Deserialize)]
struct NotifyConfig {
    /// Enable this behavior or not. (bot sends a private message)
    enabled: bool,
    /// Whether to automatically add owners to the notify list.
    add_owners: bool,
    /// Additional users to add to the notify list.
    userids: Vec<UserId>,
}

impl NotifyConfig {
    /// Construct a bug notification notify list based on the config.
    fn notify_list<U, E>(&self, fw: &Framework<U, E>) -> HashSet<UserId> {
        let mut notify_list = HashSet::new();

        // If disabled, don't add anyone to the list.
        if !self.enabled {
            return notify_list;
        }

        // Add bot owners if enabled
        if self.add_owners {
            let owners = &fw.options().owners;
            for userid in owners {
                notify_list.insert(*userid);
            }
        }

        // Add users in config
        for userid in &self.userids {
            notify_list.insert(*userid);
        }

        notify_list
    }
}

/// Write the given config to [CONFIG_PATH].
fn write_file(config: Config) -> Result<(), ConfigError> {
    use std::fs::write;

    let content = toml::to_string_pretty(&config).expect("config serialization can't fail");
    write(CONFIG_PATH, content).map_err(ConfigError::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
        discord_token = "real-looking-token"

        [operators]
        userids = ["982273229001465887"]

        [actions]
        invite_link = "https://discord.gg/abcdef"
        button_rename_to = "Community Hub"

        [health]
        port = 8080

        [logging]
        console_debug = true
        logs_enabled = false
        log_dir = "logs"

        [dev_utils.notifications]
        enabled = false
        add_owners = true
        userids = []
    "#;

    #[test]
    fn full_config_parses() {
        let config = Config::parse(FULL_CONFIG).expect("config should parse");
        config.validate().expect("config should validate");

        assert_eq!(config.token().unwrap(), "real-looking-token");
        assert!(config.allow_list().contains(&UserId::new(982273229001465887)));
        assert_eq!(config.invite_link(), "https://discord.gg/abcdef");
        assert_eq!(config.button_rename_to(), "Community Hub");
        assert_eq!(config.health_port(), 8080);
        assert!(config.console_debug());
        assert!(!config.logs_enabled());
    }

    #[test]
    fn default_config_round_trips() {
        let serialized = toml::to_string_pretty(&Config::default()).unwrap();
        let config = Config::parse(&serialized).expect("default config should parse");

        assert!(config.allow_list().is_empty());
        assert_eq!(config.health_port(), 3000);
    }

    #[test]
    fn missing_key_is_rejected_with_its_path() {
        let err = Config::parse("discord_token = \"x\"").unwrap_err();
        let reason = err.to_string();
        assert!(reason.contains("operators"), "got: {reason}");
    }

    #[test]
    fn placeholder_token_fails_sanity_check() {
        let config = Config::default();
        assert!(config.token().is_err());
    }

    #[test]
    fn bad_invite_link_fails_validation() {
        let tainted = FULL_CONFIG.replace("https://discord.gg/abcdef", "not a url");
        let config = Config::parse(&tainted).expect("still valid toml");
        assert!(config.validate().is_err());
    }
}
