//! Bot configuration: gateway (token, rejected events, presence) + logging + command prefix.
//! Loaded from env once at startup and read-only afterwards.


use std::env;

use anyhow::Result;
use dbot_core::LogConfig;
use dbot_discord::DiscordConfig;

pub const DEFAULT_PREFIX: &str = "!";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord: DiscordConfig,
    pub log: LogConfig,
    /// COMMAND_PREFIX
    pub prefix: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides DISCORD_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let prefix = env::var("COMMAND_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
        let log = LogConfig::from_env()?;
        let mut discord = DiscordConfig::load(token)?;
        discord.presence = Some(presence_text(&prefix));

        Ok(Self {
            discord,
            log,
            prefix,
        })
    }

    /// Validate config (prefix must be non-empty).
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            anyhow::bail!("COMMAND_PREFIX is set but empty");
        }
        Ok(())
    }
}

/// Status line that tells users how to invoke the command.
pub fn presence_text(prefix: &str) -> String {
    format!("write {}ping", prefix)
}
