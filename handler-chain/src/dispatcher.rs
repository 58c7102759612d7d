//! Event kind → chain registry. Built once at startup, read-only while events are dispatched.

use std::collections::HashMap;

use dbot_core::{EventKind, Message, Result};
use tracing::{debug, warn};

use crate::chain::{ChainOutcome, HandlerChain};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No chain is registered for the event kind.
    Unhandled,
    Dispatched(ChainOutcome),
}

#[derive(Clone, Default)]
pub struct Dispatcher {
    chains: HashMap<EventKind, HandlerChain>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `chain` to `kind`. A second registration for the same kind replaces the first.
    pub fn on(mut self, kind: EventKind, chain: HandlerChain) -> Self {
        if self.chains.insert(kind, chain).is_some() {
            warn!(event = %kind, "chain re-registered, previous chain replaced");
        }
        self
    }

    pub fn handles(&self, kind: EventKind) -> bool {
        self.chains.contains_key(&kind)
    }

    pub fn registered(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.chains.keys().copied()
    }

    pub async fn dispatch(&self, kind: EventKind, message: Message) -> Result<DispatchOutcome> {
        match self.chains.get(&kind) {
            Some(chain) => Ok(DispatchOutcome::Dispatched(chain.handle(message).await?)),
            None => {
                debug!(event = %kind, message_id = %message.id, "no chain registered");
                Ok(DispatchOutcome::Unhandled)
            }
        }
    }
}
