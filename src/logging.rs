//! Logging
//!
//! Level parsing from `RUST_LOG` and a `log::Log` sink that forwards records
//! into the dashboard activity panel. The terminal is owned by the UI, so log
//! output never goes to stdout while the dashboard runs.

use crate::events::{ActivityEvent, Source};
use log::{LevelFilter, Metadata, Record};
use std::env;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// Forwards `log` records to the activity panel.
///
/// Records are dropped when the channel is full or closed; the UI drains it
/// on every tick.
pub struct ActivityLogger {
    sender: mpsc::Sender<ActivityEvent>,
    threshold: LogLevel,
}

impl ActivityLogger {
    pub fn new(sender: mpsc::Sender<ActivityEvent>, threshold: LogLevel) -> Self {
        Self { sender, threshold }
    }

    /// Installs the logger as the global `log` sink.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let threshold = self.threshold;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(threshold.into());
        Ok(())
    }
}

impl log::Log for ActivityLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let event = ActivityEvent::new(
            Source::from_target(record.target()),
            record.args().to_string(),
            record.level().into(),
        );
        let _ = self.sender.try_send(event);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(
            parse_rust_log_level("storefront_admin=debug"),
            LogLevel::Debug
        );
        assert_eq!(
            parse_rust_log_level("storefront_admin=debug,ratatui=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    #[test]
    fn test_activity_logger_forwards_records_above_threshold() {
        let (tx, mut rx) = mpsc::channel(4);
        let logger = ActivityLogger::new(tx, LogLevel::Info);

        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .target("storefront_admin::navigation")
                .args(format_args!("Loading products data..."))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(log::Level::Debug)
                .target("storefront_admin::charts")
                .args(format_args!("ignored"))
                .build(),
        );

        let event = rx.try_recv().unwrap();
        assert_eq!(event.msg, "Loading products data...");
        assert_eq!(event.source, Source::Navigation);
        assert!(rx.try_recv().is_err());
    }
}
