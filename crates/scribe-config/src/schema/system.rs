//! System configuration types: notifications and logging.

use serde::{Deserialize, Serialize};

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Maximum toasts kept at once (valid range: 1-256).
    pub capacity: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { capacity: 16 }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the scribe crates at this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "scribe=trace",
            LogLevel::Debug => "scribe=debug",
            LogLevel::Info => "scribe=info",
            LogLevel::Warning => "scribe=warn",
            LogLevel::Error => "scribe=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
