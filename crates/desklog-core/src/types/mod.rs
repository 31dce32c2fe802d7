//! Core types shared by loggers and transports

mod level;
mod payload;

pub use level::{ConsoleStream, LogLevel, MessageKind};
pub use payload::Payload;
