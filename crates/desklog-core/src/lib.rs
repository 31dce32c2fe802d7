//! desklog core
//!
//! Minimal leveled logger for desktop applications, with two
//! interchangeable transports:
//! - console output for development (`dev_log`)
//! - a dated file in the platform's application log directory for
//!   production (`prod_log`)
//!
//! ```rust,no_run
//! use desklog_core::{prod_log, LogLevel, Logger, Payload};
//!
//! let log = Logger::new(LogLevel::Low, prod_log("MyApp"));
//! log.warn("dropped at Low");
//! log.error("written to ~/.config/MyApp/<date>.log on Linux");
//! log.error(Payload::json(&vec![1, 2, 3]).unwrap());
//! ```

pub mod types;
pub mod error;
pub mod paths;
pub mod logging;
pub mod config;

// Re-export commonly used types
pub use types::{ConsoleStream, LogLevel, MessageKind, Payload};

pub use error::{LogError, LogResult};

pub use paths::{CandidatePath, DirectoryResolver, Environment, FsProbe, Platform, Probe};

pub use logging::{
    dev_log, prod_log, ConsoleTransport, FileTransport, Logger, NoOpTransport,
    SharedTransport, Transport,
};

pub use config::{LoggerConfig, TransportKind};
