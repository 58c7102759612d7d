use dbot_core::Message;
use handler_chain::{SideEffect, Stage};
use tracing::info;

/// Factory for the logging stage.
#[derive(Debug, Clone, Default)]
pub struct LogFilter;

impl LogFilter {
    pub fn new() -> Self {
        Self
    }

    /// Logs the command message at info level; never rejects. Place it before `strip_prefix` to
    /// record the content as the user typed it.
    pub fn log_msg(&self) -> Stage {
        Stage::side_effect(LogMsg)
    }
}

pub struct LogMsg;

impl SideEffect for LogMsg {
    fn name(&self) -> &str {
        "log_msg"
    }

    fn run(&self, message: &Message) {
        info!(
            user_id = message.user.id,
            username = %message.user.username,
            channel_id = message.channel.id,
            message_content = %message.content,
            "Command message received"
        );
    }
}
