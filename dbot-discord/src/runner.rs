//! Gateway run loop: converts serenity events to core messages and hands them to the
//! [`Dispatcher`]. Blocks until Ctrl+C / SIGTERM.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use dbot_core::{EventKind, Message, ToCoreMessage};
use handler_chain::{DispatchOutcome, Dispatcher};
use serenity::gateway::ActivityData;
use serenity::gateway::ShardManager;
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::gateway::Ready;
use serenity::prelude::{Client, Context, EventHandler};
use tracing::{debug, error, info, instrument, warn};

use crate::adapters::SerenityMessageWrapper;
use crate::config::DiscordConfig;
use crate::intents::{gateway_intents, privileged_events};

/// Serenity event handler. Drops rejected event kinds, dispatches the rest.
pub struct GatewayHandler {
    dispatcher: Arc<Dispatcher>,
    reject_events: Vec<EventKind>,
    project_name: String,
}

impl GatewayHandler {
    pub fn new(config: &DiscordConfig, dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            reject_events: config.reject_events.clone(),
            project_name: config.project_name.clone(),
        }
    }

    /// Runs one event through its chain. Errors are logged, never returned: one failing event
    /// must not stop the gateway.
    pub async fn dispatch(&self, kind: EventKind, message: Message) -> Option<DispatchOutcome> {
        if self.reject_events.contains(&kind) {
            debug!(event = %kind, "rejected event dropped");
            return None;
        }

        let user_id = message.user.id;
        match self.dispatcher.dispatch(kind, message).await {
            Ok(outcome) => {
                debug!(event = %kind, outcome = ?outcome, "event dispatched");
                Some(outcome)
            }
            Err(e) => {
                error!(error = %e, event = %kind, user_id = user_id, "Handler chain failed");
                None
            }
        }
    }
}

#[async_trait]
impl EventHandler for GatewayHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            project = %self.project_name,
            bot_user = %ready.user.name,
            bot_user_id = ready.user.id.get(),
            guilds = ready.guilds.len(),
            "Connected to Discord gateway"
        );
    }

    async fn message(&self, _ctx: Context, msg: SerenityMessage) {
        let core_msg = SerenityMessageWrapper(&msg).to_core();
        debug!(
            user_id = core_msg.user.id,
            channel_id = core_msg.channel.id,
            message_id = %core_msg.id,
            "Received message"
        );
        self.dispatch(EventKind::MessageCreate, core_msg).await;
    }
}

/// Connects to the gateway with intents derived from `config` and dispatches events until the
/// process is interrupted.
#[instrument(skip(config, dispatcher), fields(project = %config.project_name))]
pub async fn run_gateway(config: &DiscordConfig, dispatcher: Dispatcher) -> Result<()> {
    let intents = gateway_intents(&config.reject_events, config.dm_events);
    info!(
        intents = ?intents,
        rejected = ?config.reject_events,
        registered = ?dispatcher.registered().collect::<Vec<_>>(),
        "Starting Discord gateway connection"
    );
    let privileged = privileged_events(&config.reject_events);
    if !privileged.is_empty() {
        warn!(
            events = ?privileged,
            "Privileged events requested; their intents must be enabled for the application"
        );
    }

    let handler = GatewayHandler::new(config, dispatcher);
    let mut builder = Client::builder(&config.bot_token, intents).event_handler(handler);
    if let Some(presence) = &config.presence {
        builder = builder.activity(ActivityData::playing(presence.clone()));
    }

    let mut client = builder
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create Discord client: {}", e))?;

    tokio::spawn(shutdown_on_signal(client.shard_manager.clone()));

    client
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Discord client error: {}", e))?;

    info!("Discord gateway stopped");
    Ok(())
}

async fn shutdown_on_signal(shard_manager: Arc<ShardManager>) {
    wait_for_signal().await;
    info!("Shutdown signal received, stopping Discord client...");
    shard_manager.shutdown_all().await;
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(e) => {
            warn!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl+C only");
            tokio::signal::ctrl_c().await.ok();
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    tokio::signal::ctrl_c().await.ok();
}
