//! Gateway configuration: token, project name, rejected events, DM events, presence.
//! Loaded from DISCORD_TOKEN, PROJECT_NAME, DISCORD_REJECT_EVENTS, DISCORD_DM_EVENTS.

use std::env;

use anyhow::{Context, Result};
use dbot_core::EventKind;

/// Events rejected when DISCORD_REJECT_EVENTS is unset. Typing is noisy; presence and member
/// events need privileged intents.
pub const DEFAULT_REJECT_EVENTS: [EventKind; 5] = [
    EventKind::TypingStart,
    EventKind::PresenceUpdate,
    EventKind::GuildMemberAdd,
    EventKind::GuildMemberUpdate,
    EventKind::GuildMemberRemove,
];

#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub bot_token: String,
    pub project_name: String,
    pub reject_events: Vec<EventKind>,
    /// Request direct-message intents.
    pub dm_events: bool,
    /// Activity shown as the bot's status, e.g. "write !ping".
    pub presence: Option<String>,
}

impl DiscordConfig {
    /// Loads from env. `token` overrides DISCORD_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("DISCORD_TOKEN").context("DISCORD_TOKEN not set")?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("Discord bot token is empty");
        }

        let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "MyBot".to_string());

        let reject_events = match env::var("DISCORD_REJECT_EVENTS") {
            Ok(list) => parse_event_list(&list)?,
            Err(_) => DEFAULT_REJECT_EVENTS.to_vec(),
        };

        let dm_events = match env::var("DISCORD_DM_EVENTS") {
            Ok(value) => parse_flag(&value).context("Invalid DISCORD_DM_EVENTS")?,
            Err(_) => false,
        };

        Ok(Self {
            bot_token,
            project_name,
            reject_events,
            dm_events,
            presence: None,
        })
    }

    /// Uses the given token; everything else takes its default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            project_name: "MyBot".to_string(),
            reject_events: DEFAULT_REJECT_EVENTS.to_vec(),
            dm_events: false,
            presence: None,
        }
    }

    pub fn is_rejected(&self, kind: EventKind) -> bool {
        self.reject_events.contains(&kind)
    }
}

/// Parses an on/off env value. Empty means off.
pub fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected true/false, got '{}'", other),
    }
}

/// Parses a comma-separated list of wire event names. Empty entries are skipped.
pub fn parse_event_list(list: &str) -> Result<Vec<EventKind>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<EventKind>()
                .with_context(|| format!("Invalid DISCORD_REJECT_EVENTS entry: {}", s))
        })
        .collect()
}
