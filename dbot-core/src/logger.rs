//! Tracing initialization: one global subscriber with a level threshold, a console sink, an optional
//! log file teed alongside it, and plain or JSON formatting.

use std::env;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::writer::{BoxMakeWriter, MakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::error::{DbotError, Result};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = DbotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            other => Err(DbotError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Console stream the logs go to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogSink {
    #[default]
    Stderr,
    Stdout,
}

impl FromStr for LogSink {
    type Err = DbotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stderr" => Ok(LogSink::Stderr),
            "stdout" => Ok(LogSink::Stdout),
            other => Err(DbotError::Config(format!("Unknown log sink: {}", other))),
        }
    }
}

/// Logger settings. Loaded from LOG_LEVEL, LOG_FORMAT, LOG_SINK, LOG_FILE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Threshold directive (e.g. `info`, `error`, `ping_bot=debug,info`). RUST_LOG wins when set.
    pub level: String,
    pub format: LogFormat,
    pub sink: LogSink,
    /// Extra log file; lines are written to both the console sink and this file.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            sink: LogSink::default(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let level = env::var("LOG_LEVEL").unwrap_or(defaults.level);
        let format = match env::var("LOG_FORMAT") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.format,
        };
        let sink = match env::var("LOG_SINK") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.sink,
        };
        let file = env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            level,
            format,
            sink,
            file,
        })
    }

    /// Builds the level filter: RUST_LOG if present, else `self.level`.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                DbotError::Config(format!("Invalid log level '{}': {}", self.level, e))
            }),
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn build_writer(config: &LogConfig) -> Result<BoxMakeWriter> {
    let console = match config.sink {
        LogSink::Stderr => BoxMakeWriter::new(io::stderr),
        LogSink::Stdout => BoxMakeWriter::new(io::stdout),
    };

    match &config.file {
        Some(path) => {
            let file = Arc::new(open_log_file(path)?);
            Ok(BoxMakeWriter::new(console.and(file)))
        }
        None => Ok(console),
    }
}

/// Filter plus fmt layer (plain or JSON) over `writer`. Not installed.
fn build_subscriber<W>(config: &LogConfig, writer: W) -> Result<Box<dyn Subscriber + Send + Sync>>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = config.env_filter()?;
    let ansi = config.file.is_none();

    let registry = Registry::default().with(env_filter);
    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.format {
        LogFormat::Plain => Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_level(true),
            ),
        ),
        LogFormat::Json => Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_level(true),
            ),
        ),
    };
    Ok(subscriber)
}

/// Installs the global tracing subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<()> {
    let writer = build_writer(config)?;
    let subscriber = build_subscriber(config, writer)?;

    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
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

    fn capture(config: &LogConfig, emit: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = build_subscriber(config, move || writer.clone()).unwrap();
        tracing::subscriber::with_default(subscriber, emit);
        logs.contents()
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Plain);
        assert_eq!(config.sink, LogSink::Stderr);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_parse_format_and_sink() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Plain);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("stdout".parse::<LogSink>().unwrap(), LogSink::Stdout);
        assert!("syslog".parse::<LogSink>().is_err());
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("bot.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_build_writer_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            file: Some(dir.path().join("bot.log")),
            ..LogConfig::default()
        };
        assert!(build_writer(&config).is_ok());
        assert!(dir.path().join("bot.log").exists());
    }

    #[test]
    fn test_build_writer_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"").unwrap();
        let config = LogConfig {
            file: Some(blocker.join("bot.log")),
            ..LogConfig::default()
        };

        assert!(matches!(build_writer(&config), Err(DbotError::Io(_))));
    }

    #[test]
    #[serial]
    fn test_invalid_level_is_config_error() {
        env::remove_var("RUST_LOG");
        let config = LogConfig {
            level: "not a level[".to_string(),
            ..LogConfig::default()
        };

        assert!(matches!(config.env_filter(), Err(DbotError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_rust_log_overrides_level() {
        env::set_var("RUST_LOG", "debug");
        let config = LogConfig {
            level: "error".to_string(),
            ..LogConfig::default()
        };

        let out = capture(&config, || tracing::debug!("debug line"));
        env::remove_var("RUST_LOG");

        assert!(out.contains("debug line"));
    }

    #[test]
    #[serial]
    fn test_lines_below_threshold_are_suppressed() {
        env::remove_var("RUST_LOG");
        let config = LogConfig {
            level: "warn".to_string(),
            ..LogConfig::default()
        };

        let out = capture(&config, || {
            tracing::info!("info line");
            tracing::warn!("warn line");
        });

        assert!(!out.contains("info line"));
        assert!(out.contains("warn line"));
    }

    #[test]
    #[serial]
    fn test_json_format_emits_one_object_per_line() {
        env::remove_var("RUST_LOG");
        let config = LogConfig {
            format: LogFormat::Json,
            ..LogConfig::default()
        };

        let out = capture(&config, || tracing::info!(user_id = 7u64, "hello"));

        let line = out.lines().next().unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.is_object());
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["fields"]["message"], "hello");
        assert_eq!(value["fields"]["user_id"], 7);
    }

    #[test]
    #[serial]
    fn test_init_tracing_twice_fails() {
        env::remove_var("RUST_LOG");
        let config = LogConfig::default();

        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_err());
    }
}
