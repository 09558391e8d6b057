//! Event System
//!
//! Activity entries shown in the dashboard's activity panel

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;

/// Component that produced an activity entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    Navigation,
    Layout,
    Charts,
    Tables,
    LiveData,
    System,
}

impl Source {
    /// Maps a `log` target (module path) to the component that emitted it.
    pub fn from_target(target: &str) -> Self {
        let module = target.split("::").nth(1).unwrap_or_default();
        match module {
            "navigation" => Source::Navigation,
            "layout" | "device" => Source::Layout,
            "charts" => Source::Charts,
            "tables" | "notifications" => Source::Tables,
            "live_data" => Source::LiveData,
            _ => Source::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub log_level: LogLevel,
}

impl ActivityEvent {
    pub fn new(source: Source, msg: String, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
        }
    }
}

impl Display for ActivityEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.source, self.timestamp, self.msg)
    }
}
