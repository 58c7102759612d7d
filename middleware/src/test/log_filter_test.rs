//! Unit tests for LogFilter, alone and in a full command chain.

use std::sync::Arc;

use dbot_core::{Handler, HandlerResponse, Message};
use handler_chain::{FilterOutcome, HandlerChain, StageResult};

use super::{sample_message, CapturedLogs};
use crate::{LogFilter, MsgFilter};

struct NoopHandler;

#[async_trait::async_trait]
impl Handler for NoopHandler {
    async fn handle(&self, _message: &Message) -> dbot_core::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
}

fn command_chain(filter: &MsgFilter) -> HandlerChain {
    HandlerChain::new(Arc::new(NoopHandler))
        .add_stage(filter.not_by_bot())
        .add_stage(filter.has_prefix())
        .add_stage(LogFilter::new().log_msg())
        .add_stage(filter.strip_prefix())
}

#[test]
fn test_log_msg_passes_and_logs_content() {
    let logs = CapturedLogs::default();
    let stage = LogFilter::new().log_msg();
    let mut msg = sample_message(false, "!ping");

    let result = tracing::subscriber::with_default(logs.subscriber(), || stage.run(&mut msg));

    assert_eq!(result, StageResult::Pass);
    assert_eq!(msg.content, "!ping");
    let out = logs.contents();
    assert!(out.contains("Command message received"));
    assert!(out.contains("message_content=!ping"));
    assert!(out.contains("user_id=100"));
}

#[test]
fn test_log_msg_before_strip_records_original_content() {
    let filter = MsgFilter::new("!").unwrap();
    let chain = command_chain(&filter);
    let logs = CapturedLogs::default();

    let outcome = tracing::subscriber::with_default(logs.subscriber(), || {
        chain.filter(sample_message(false, "!ping"))
    });

    match outcome {
        FilterOutcome::Passed(m) => assert_eq!(m.content, "ping"),
        other => panic!("expected Passed, got {:?}", other),
    }
    let out = logs.contents();
    assert!(out.contains("message_content=!ping"));
    assert!(!out.contains("message_content=ping"));
}

#[test]
fn test_log_msg_after_strip_records_stripped_content() {
    let filter = MsgFilter::new("!").unwrap();
    let swapped = HandlerChain::new(Arc::new(NoopHandler))
        .add_stage(filter.has_prefix())
        .add_stage(filter.strip_prefix())
        .add_stage(LogFilter::new().log_msg());
    let logs = CapturedLogs::default();

    tracing::subscriber::with_default(logs.subscriber(), || {
        swapped.filter(sample_message(false, "!ping"))
    });

    assert!(logs.contents().contains("message_content=ping"));
    assert!(!logs.contents().contains("message_content=!ping"));
}

#[test]
fn test_bot_author_is_not_logged() {
    let filter = MsgFilter::new("!").unwrap();
    let chain = command_chain(&filter);
    let logs = CapturedLogs::default();

    let outcome = tracing::subscriber::with_default(logs.subscriber(), || {
        chain.filter(sample_message(true, "!ping"))
    });

    assert_eq!(
        outcome,
        FilterOutcome::Rejected {
            stage: "not_by_bot".to_string()
        }
    );
    assert!(!logs.contents().contains("Command message received"));
}

#[test]
fn test_unprefixed_message_is_not_logged() {
    let filter = MsgFilter::new("!").unwrap();
    let chain = command_chain(&filter);
    let logs = CapturedLogs::default();

    let outcome = tracing::subscriber::with_default(logs.subscriber(), || {
        chain.filter(sample_message(false, "ping"))
    });

    assert_eq!(
        outcome,
        FilterOutcome::Rejected {
            stage: "has_prefix".to_string()
        }
    );
    assert!(!logs.contents().contains("Command message received"));
}
