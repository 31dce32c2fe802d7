//! Transport trait definition

use std::sync::Arc;

use crate::types::{MessageKind, Payload};

/// Destination a formatted log record is written to
///
/// Implementations:
/// - `ConsoleTransport`: stdout/stderr, for development
/// - `FileTransport`: dated file in the resolved log directory, for production
/// - `NoOpTransport`: drops everything
pub trait Transport: Send + Sync {
    /// Write one record
    ///
    /// Transports never report I/O failures back to the caller.
    fn write(&self, kind: MessageKind, message: &Payload);
}

/// Type alias for an Arc-wrapped transport
pub type SharedTransport = Arc<dyn Transport>;

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn write(&self, kind: MessageKind, message: &Payload) {
        (**self).write(kind, message)
    }
}
