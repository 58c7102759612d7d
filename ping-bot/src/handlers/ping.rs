//! Replies "pong" to the "ping" command body.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{debug, error, info, instrument};

use crate::command::Command;

/// Terminal handler for command messages (prefix already stripped).
///
/// Unknown commands are ignored. A failed reply is logged and reported as `Stop`; it is never
/// returned as an error.
pub struct PingHandler {
    bot: Arc<dyn Bot>,
}

impl PingHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for PingHandler {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let command = match message.content.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(reason = %e, "not a known command, ignoring");
                return Ok(HandlerResponse::Ignore);
            }
        };

        let reply = command.reply_text();
        match self.bot.reply_to(message, reply).await {
            Ok(()) => {
                info!(
                    command = command.name(),
                    channel_id = message.channel.id,
                    user_id = message.user.id,
                    "Replied to command"
                );
                Ok(HandlerResponse::Reply(reply.to_string()))
            }
            Err(e) => {
                error!(
                    trace = "ping_handler.reply",
                    error = %e,
                    channel_id = message.channel.id,
                    "failed to reply to {}",
                    command.name()
                );
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
