//! # ping-bot
//!
//! Wires the message filters, the ping handler and the Discord gateway. Loads config from env and
//! runs until interrupted.

pub mod cli;
pub mod command;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use command::Command;
pub use config::BotConfig;
pub use handlers::PingHandler;
pub use runner::{build_dispatcher, build_handler_chain, run_bot};
