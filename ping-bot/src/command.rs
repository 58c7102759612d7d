//! Known commands. Matching is exact: no trimming, no case folding.

use std::str::FromStr;

use dbot_core::HandlerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "ping",
        }
    }

    pub fn reply_text(&self) -> &'static str {
        match self {
            Command::Ping => "pong",
        }
    }
}

impl FromStr for Command {
    type Err = HandlerError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        match body {
            "ping" => Ok(Command::Ping),
            other => Err(HandlerError::InvalidCommand(other.to_string())),
        }
    }
}
