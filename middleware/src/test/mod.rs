//! Unit test module
//!
//! Filter stage unit tests live here, separate from source files.
//! Tests interact with the stages via public APIs.

mod log_filter_test;

use std::io;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use dbot_core::{Channel, Message, User};

pub(crate) fn sample_message(is_bot: bool, content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 100,
            username: "testuser".to_string(),
            is_bot,
        },
        channel: Channel {
            id: 123,
            guild_id: Some(1),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

/// In-memory log sink for asserting on formatted tracing output.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub(crate) fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let logs = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
