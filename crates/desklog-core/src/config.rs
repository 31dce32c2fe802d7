//! Logger configuration
//!
//! Hosts usually hard-code the level and transport per build profile; the
//! environment can override both:
//! - `DESKLOG_LEVEL`: `silent` | `low` | `high`
//! - `DESKLOG_TRANSPORT`: `console` (or `dev`) | `file` (or `prod`)

use std::env;

use crate::logging::{dev_log, prod_log_with, Logger};
use crate::paths::DirectoryResolver;
use crate::types::LogLevel;

/// Environment variable holding the log level
pub const LEVEL_ENV: &str = "DESKLOG_LEVEL";

/// Environment variable selecting the transport
pub const TRANSPORT_ENV: &str = "DESKLOG_TRANSPORT";

/// Which transport a logger is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// stdout/stderr
    Console,
    /// Dated file in the platform log directory
    File,
}

impl TransportKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "console" | "dev" => Some(TransportKind::Console),
            "file" | "prod" => Some(TransportKind::File),
            _ => None,
        }
    }
}

/// Settings used to build a `Logger` at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub transport: TransportKind,
    /// Application name, used as the log directory name
    pub product_name: String,
}

impl LoggerConfig {
    /// Defaults: errors only, written to file
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Low,
            transport: TransportKind::File,
            product_name: product_name.into(),
        }
    }

    /// Defaults overridden by `DESKLOG_LEVEL` / `DESKLOG_TRANSPORT`
    pub fn from_env(product_name: impl Into<String>) -> Self {
        Self::from_lookup(product_name, |key| env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`
    ///
    /// Unparseable values are ignored.
    pub fn from_lookup<F>(product_name: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::new(product_name);
        let level = lookup(LEVEL_ENV)
            .and_then(|v| v.parse::<LogLevel>().ok())
            .unwrap_or(defaults.level);
        let transport = lookup(TRANSPORT_ENV)
            .and_then(|v| TransportKind::parse(&v))
            .unwrap_or(defaults.transport);

        Self {
            level,
            transport,
            ..defaults
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_transport(mut self, transport: TransportKind) -> Self {
        self.transport = transport;
        self
    }

    /// Build the logger, resolving the log directory if needed
    pub fn build(&self) -> Logger {
        self.build_with(&DirectoryResolver::for_current_process(&self.product_name))
    }

    /// Build the logger with an explicit resolver for the file transport
    pub fn build_with(&self, resolver: &DirectoryResolver) -> Logger {
        let transport = match self.transport {
            TransportKind::Console => dev_log(),
            TransportKind::File => prod_log_with(resolver),
        };
        Logger::new(self.level, transport)
    }
}
