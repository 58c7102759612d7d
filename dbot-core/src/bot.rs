//! Bot abstraction for outbound messages.
//!
//! [`Bot`] is transport-agnostic; `dbot-discord` implements it over the Discord HTTP API.

use crate::types::{Channel, Message};
use crate::error::Result;
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Discord).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given channel.
    async fn send_message(&self, channel: &Channel, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same channel).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.channel, text).await
    }
}
