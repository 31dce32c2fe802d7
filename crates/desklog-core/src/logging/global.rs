//! Process-wide logger
//!
//! The host installs one `Logger` at startup; library code can then log
//! through the free functions here without threading a handle around.
//! Before installation every call is dropped.

use once_cell::sync::OnceCell;

use super::logger::Logger;
use crate::types::Payload;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Install the process-wide logger
///
/// Only the first call succeeds; later calls hand the logger back.
pub fn install(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// Get the installed logger, if any
pub fn get() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Log an info message through the installed logger
pub fn info(message: impl Into<Payload>) {
    if let Some(logger) = get() {
        logger.info(message);
    }
}

/// Log a warning message through the installed logger
pub fn warn(message: impl Into<Payload>) {
    if let Some(logger) = get() {
        logger.warn(message);
    }
}

/// Log an error message through the installed logger
pub fn error(message: impl Into<Payload>) {
    if let Some(logger) = get() {
        logger.error(message);
    }
}

/// Log a verbose message through the installed logger
pub fn verbose(message: impl Into<Payload>) {
    if let Some(logger) = get() {
        logger.verbose(message);
    }
}
