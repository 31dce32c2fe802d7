//! Leveled logging with interchangeable transports
//!
//! - `dev_log()`: console transport for development
//! - `prod_log()`: dated file in the platform log directory, or a no-op
//!   transport when no directory is usable

mod traits;
mod noop;
mod console;
mod file;
mod logger;
pub mod global;

use std::sync::Arc;

pub use traits::{SharedTransport, Transport};
pub use noop::NoOpTransport;
pub use console::{console_timestamp, ConsoleTransport};
pub use file::{format_record, log_file_name, FileTransport};
pub use logger::{should_emit, Logger};

use crate::paths::DirectoryResolver;

/// Transport for development builds
pub fn dev_log() -> SharedTransport {
    Arc::new(ConsoleTransport::new())
}

/// Transport for production builds
///
/// Resolves the log directory for the running platform once. When no
/// candidate directory is usable every record is dropped.
pub fn prod_log(product_name: &str) -> SharedTransport {
    prod_log_with(&DirectoryResolver::for_current_process(product_name))
}

/// Transport for production builds using an explicit resolver
pub fn prod_log_with(resolver: &DirectoryResolver) -> SharedTransport {
    let transport = resolver
        .resolve()
        .and_then(|dir| FileTransport::try_open(&dir).ok());

    match transport {
        Some(file) => Arc::new(file),
        None => Arc::new(NoOpTransport::new()),
    }
}
