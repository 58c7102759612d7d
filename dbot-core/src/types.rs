//! Core types: user, channel, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author identity as seen by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// True for automated accounts (bots, webhooks).
    pub is_bot: bool,
}

/// Originating context of a message: the channel, and the guild when not a DM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
    pub guild_id: Option<u64>,
}

/// One inbound chat message. Owned by a single dispatch pass; stages may rewrite `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub channel: Channel,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Handler result. `Reply(text)` carries the body that was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Nothing to do; the message was accepted.
    Continue,
    /// Processing ended without a reply (e.g. the reply could not be delivered).
    Stop,
    /// The message was not meant for this handler.
    Ignore,
    /// A reply with this text was sent.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Terminal handler of a chain; sees the message after every stage passed.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}

