//! Adapters from Discord (serenity) types to dbot_core types.
//! Depends only on serenity model types and dbot_core type definitions.

use chrono::{DateTime, Utc};
use dbot_core::{Channel, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a serenity User for conversion to core [`User`].
pub struct SerenityUserWrapper<'a>(pub &'a serenity::model::user::User);

impl<'a> ToCoreUser for SerenityUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.get(),
            username: self.0.name.clone(),
            is_bot: self.0.bot,
        }
    }
}

/// Wraps a serenity Message for conversion to core [`Message`].
pub struct SerenityMessageWrapper<'a>(pub &'a serenity::model::channel::Message);

impl<'a> ToCoreMessage for SerenityMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: SerenityUserWrapper(&self.0.author).to_core(),
            channel: Channel {
                id: self.0.channel_id.get(),
                guild_id: self.0.guild_id.map(|g| g.get()),
            },
            content: self.0.content.clone(),
            created_at: self.created_at(),
        }
    }
}

impl<'a> SerenityMessageWrapper<'a> {
    fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0.timestamp.unix_timestamp(), 0).unwrap_or_else(Utc::now)
    }
}
