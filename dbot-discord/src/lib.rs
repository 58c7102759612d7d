//! # dbot-discord
//!
//! Discord gateway layer: adapters, [`dbot_core::Bot`] implementation, gateway config, intent
//! mapping, and the run loop. Handles only Discord connectivity and dispatch; command logic lives
//! in the chains the caller registers.

mod adapters;
mod bot_adapter;
mod config;
mod intents;
mod runner;

pub use adapters::{SerenityMessageWrapper, SerenityUserWrapper};
pub use bot_adapter::DiscordBotAdapter;
pub use config::{parse_event_list, parse_flag, DiscordConfig, DEFAULT_REJECT_EVENTS};
pub use intents::{gateway_intents, privileged_events};
pub use runner::{run_gateway, GatewayHandler};
