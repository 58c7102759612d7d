//! Message filters: drop automated authors, require the command prefix, strip it.

use std::sync::Arc;

use dbot_core::{DbotError, Message, Result};
use handler_chain::{Predicate, Stage, Transform};

/// Factory for the message stages. Holds the command prefix, fixed once constructed and shared
/// read-only by every stage it hands out.
#[derive(Debug, Clone)]
pub struct MsgFilter {
    prefix: Arc<str>,
}

impl MsgFilter {
    /// Fails on an empty prefix: every message would count as a command.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(DbotError::Config("command prefix must not be empty".to_string()));
        }
        Ok(Self {
            prefix: prefix.into(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Rejects messages whose author is an automated account.
    pub fn not_by_bot(&self) -> Stage {
        Stage::predicate(NotByBot)
    }

    /// Rejects messages that do not start with the prefix (exact, case-sensitive).
    pub fn has_prefix(&self) -> Stage {
        Stage::predicate(HasPrefix {
            prefix: self.prefix.clone(),
        })
    }

    /// Removes the prefix from the start of the content.
    pub fn strip_prefix(&self) -> Stage {
        Stage::transform(StripPrefix {
            prefix: self.prefix.clone(),
        })
    }
}

pub struct NotByBot;

impl Predicate for NotByBot {
    fn name(&self) -> &str {
        "not_by_bot"
    }

    fn check(&self, message: &Message) -> bool {
        !message.user.is_bot
    }
}

pub struct HasPrefix {
    prefix: Arc<str>,
}

impl Predicate for HasPrefix {
    fn name(&self) -> &str {
        "has_prefix"
    }

    fn check(&self, message: &Message) -> bool {
        message.content.starts_with(&*self.prefix)
    }
}

pub struct StripPrefix {
    prefix: Arc<str>,
}

impl Transform for StripPrefix {
    fn name(&self) -> &str {
        "strip_prefix"
    }

    fn apply(&self, message: &mut Message) {
        // Content without the prefix is left untouched.
        if message.content.starts_with(&*self.prefix) {
            message.content.replace_range(..self.prefix.len(), "");
        }
    }
}
