//! Log levels and message kinds

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Verbosity of a logger
///
/// A logger has exactly one level for its whole lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Nothing is emitted
    #[default]
    Silent = 1,
    /// Only error messages are emitted
    Low = 2,
    /// Everything is emitted
    High = 3,
}

impl LogLevel {
    /// Map a host-supplied numeric level to a `LogLevel`
    ///
    /// Unknown codes fall back to `Silent`.
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => LogLevel::Low,
            3 => LogLevel::High,
            _ => LogLevel::Silent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Silent => "silent",
            LogLevel::Low => "low",
            LogLevel::High => "high",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silent" | "off" | "none" => Ok(LogLevel::Silent),
            "low" | "error" => Ok(LogLevel::Low),
            "high" | "all" | "verbose" => Ok(LogLevel::High),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

/// Output stream a console record is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Severity of a single message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Warn,
    Error,
    /// Unspecified kind
    #[default]
    Verbose,
}

impl MessageKind {
    /// Tag written between brackets in a file record
    pub fn tag(&self) -> &'static str {
        match self {
            MessageKind::Info => "INFO",
            MessageKind::Warn => "WARN",
            MessageKind::Error => "ERROR",
            MessageKind::Verbose => "VERBOSE",
        }
    }

    /// Stream the console transport writes this kind to
    pub fn console_stream(&self) -> ConsoleStream {
        match self {
            MessageKind::Warn | MessageKind::Error => ConsoleStream::Stderr,
            MessageKind::Info | MessageKind::Verbose => ConsoleStream::Stdout,
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
