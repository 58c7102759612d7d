//! Wraps serenity's HTTP client and implements [`dbot_core::Bot`]. Production code sends messages via
//! Discord; tests can substitute another Bot impl.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Channel, DbotError, Result};
use serenity::http::Http;
use serenity::model::id::ChannelId;

/// Thin wrapper around serenity's Http that implements dbot-core's Bot trait.
pub struct DiscordBotAdapter {
    http: Arc<Http>,
}

impl DiscordBotAdapter {
    /// Creates an adapter from an existing HTTP client (e.g. `client.http`).
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Creates an adapter with its own HTTP client for `token`.
    pub fn from_token(token: &str) -> Self {
        Self::new(Arc::new(Http::new(token)))
    }
}

fn channel_id(channel: &Channel) -> Result<ChannelId> {
    if channel.id == 0 {
        return Err(DbotError::Bot("Invalid channel id: 0".to_string()));
    }
    Ok(ChannelId::new(channel.id))
}

#[async_trait]
impl CoreBot for DiscordBotAdapter {
    async fn send_message(&self, channel: &Channel, text: &str) -> Result<()> {
        channel_id(channel)?
            .say(&*self.http, text)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
