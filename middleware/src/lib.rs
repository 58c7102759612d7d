//! # middleware
//!
//! Standard filter stages for command messages: [`MsgFilter`] (not-by-bot, has-prefix,
//! strip-prefix) and [`LogFilter`] (log the command message).

mod log_filter;
mod msg_filter;

#[cfg(test)]
mod test;

pub use log_filter::{LogFilter, LogMsg};
pub use msg_filter::{HasPrefix, MsgFilter, NotByBot, StripPrefix};
