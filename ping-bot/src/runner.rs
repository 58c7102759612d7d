use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot, EventKind};
use dbot_discord::{run_gateway, DiscordBotAdapter};
use handler_chain::{Dispatcher, HandlerChain};
use middleware::{LogFilter, MsgFilter};
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::PingHandler;

/// Builds the command chain: not-by-bot, has-prefix, log, strip-prefix, then the ping handler.
/// Logging runs before stripping so the log shows what the user typed.
pub fn build_handler_chain(prefix: &str, bot: Arc<dyn Bot>) -> dbot_core::Result<HandlerChain> {
    let filter = MsgFilter::new(prefix)?;
    let log_filter = LogFilter::new();

    Ok(HandlerChain::new(Arc::new(PingHandler::new(bot)))
        .add_stage(filter.not_by_bot())
        .add_stage(filter.has_prefix())
        .add_stage(log_filter.log_msg())
        .add_stage(filter.strip_prefix()))
}

/// Registers the command chain for created messages.
pub fn build_dispatcher(config: &BotConfig, bot: Arc<dyn Bot>) -> dbot_core::Result<Dispatcher> {
    let chain = build_handler_chain(&config.prefix, bot)?;
    Ok(Dispatcher::new().on(EventKind::MessageCreate, chain))
}

/// Main entry: validate config, init logging, build the chain, then run the gateway until
/// interrupted.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log)?;

    info!(
        project = %config.discord.project_name,
        prefix = %config.prefix,
        "Initializing bot"
    );

    let bot: Arc<dyn Bot> = Arc::new(DiscordBotAdapter::from_token(&config.discord.bot_token));
    let dispatcher =
        build_dispatcher(&config, bot).context("Failed to build message handler chain")?;

    info!("Bot started successfully");

    run_gateway(&config.discord, dispatcher).await
}
