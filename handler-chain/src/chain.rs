use std::sync::Arc;

use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

use crate::stage::{Stage, StageResult};

/// Outcome of running only the stages of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Every stage passed; carries the message as rewritten by transform stages.
    Passed(Message),
    /// A predicate rejected; later stages and the handler did not run.
    Rejected { stage: String },
}

/// Outcome of a full chain run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    Rejected { stage: String },
    Handled(HandlerResponse),
}

/// Ordered stages in front of one terminal handler. Stages run in insertion order; the first
/// rejecting predicate short-circuits the rest.
#[derive(Clone)]
pub struct HandlerChain {
    stages: Vec<Stage>,
    handler: Arc<dyn Handler>,
}

impl HandlerChain {
    /// Creates a chain with no stages in front of `handler`.
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self {
            stages: Vec::new(),
            handler,
        }
    }

    /// Appends a stage (runs after every stage added before it).
    pub fn add_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs the stages over `message` without invoking the handler.
    pub fn filter(&self, mut message: Message) -> FilterOutcome {
        for stage in &self.stages {
            debug!(
                message_id = %message.id,
                stage = %stage.name(),
                kind = stage.kind(),
                "step: stage"
            );
            if stage.run(&mut message) == StageResult::Reject {
                debug!(
                    message_id = %message.id,
                    stage = %stage.name(),
                    "step: stage rejected, chain stopped"
                );
                return FilterOutcome::Rejected {
                    stage: stage.name().to_string(),
                };
            }
        }
        FilterOutcome::Passed(message)
    }

    /// Runs the stages, then the handler if every stage passed.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn handle(&self, message: Message) -> Result<ChainOutcome> {
        let message = match self.filter(message) {
            FilterOutcome::Passed(message) => message,
            FilterOutcome::Rejected { stage } => return Ok(ChainOutcome::Rejected { stage }),
        };

        let handler_name = std::any::type_name_of_val(self.handler.as_ref());
        debug!(
            user_id = message.user.id,
            handler = %handler_name,
            "step: handler processing"
        );
        let response = self.handler.handle(&message).await?;
        info!(
            user_id = message.user.id,
            channel_id = message.channel.id,
            handler = %handler_name,
            response = ?response,
            "step: handler done"
        );

        Ok(ChainOutcome::Handled(response))
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
