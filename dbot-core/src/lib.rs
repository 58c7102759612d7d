//! # dbot-core
//!
//! Core types and traits for the chat bot: [`Bot`], [`Handler`], message and user types,
//! gateway [`EventKind`]s, and tracing initialization. Transport-agnostic; used by handler-chain,
//! middleware and dbot-discord.

pub mod bot;
pub mod error;
pub mod event;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use event::EventKind;
pub use logger::{init_tracing, LogConfig, LogFormat, LogSink};
pub use types::{Channel, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
