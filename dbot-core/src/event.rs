//! Gateway event kinds, named as they appear on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DbotError;

/// Gateway events the bot can register for or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Ready,
    MessageCreate,
    MessageUpdate,
    MessageDelete,
    TypingStart,
    PresenceUpdate,
    GuildMemberAdd,
    GuildMemberUpdate,
    GuildMemberRemove,
}

impl EventKind {
    pub const ALL: [EventKind; 9] = [
        EventKind::Ready,
        EventKind::MessageCreate,
        EventKind::MessageUpdate,
        EventKind::MessageDelete,
        EventKind::TypingStart,
        EventKind::PresenceUpdate,
        EventKind::GuildMemberAdd,
        EventKind::GuildMemberUpdate,
        EventKind::GuildMemberRemove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Ready => "READY",
            EventKind::MessageCreate => "MESSAGE_CREATE",
            EventKind::MessageUpdate => "MESSAGE_UPDATE",
            EventKind::MessageDelete => "MESSAGE_DELETE",
            EventKind::TypingStart => "TYPING_START",
            EventKind::PresenceUpdate => "PRESENCE_UPDATE",
            EventKind::GuildMemberAdd => "GUILD_MEMBER_ADD",
            EventKind::GuildMemberUpdate => "GUILD_MEMBER_UPDATE",
            EventKind::GuildMemberRemove => "GUILD_MEMBER_REMOVE",
        }
    }

    /// Events that need a privileged gateway intent to be delivered.
    pub fn is_privileged(&self) -> bool {
        matches!(
            self,
            EventKind::PresenceUpdate
                | EventKind::GuildMemberAdd
                | EventKind::GuildMemberUpdate
                | EventKind::GuildMemberRemove
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = DbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| DbotError::Config(format!("Unknown event kind: {}", s)))
    }
}
