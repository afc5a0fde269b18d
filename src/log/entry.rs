//! Log entry model for the terminal view.
//!
//! Mirrors the wire shape the log console exchanges with the frontend:
//! `{ timestamp, level, message, data? }` with lowercase level names and
//! an optional structured payload.

use chrono::Local;
use serde::{Deserialize, Serialize};

// =============================================================================
// LogLevel
// =============================================================================

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Error,
    Warn,
}

impl LogLevel {
    /// Bracketed tag shown at the head of a rendered line.
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO]",
            LogLevel::Success => "[SUCCESS]",
            LogLevel::Error => "[ERROR]",
            LogLevel::Warn => "[WARN]",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
        }
    }
}

// =============================================================================
// LogEntry
// =============================================================================

/// One console line plus its optional payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock stamp, `HH:MM:SS`.
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    /// Structured payload; pretty-printed and linkified at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl LogEntry {
    /// New entry stamped with the local wall-clock time.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            level,
            message: message.into(),
            data: None,
        }
    }

    /// Attach a structured payload.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

// =============================================================================
// Tests (TDD - written first!)
// =============================================================================
