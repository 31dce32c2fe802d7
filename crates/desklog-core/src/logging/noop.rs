//! No-op transport implementation

use super::traits::Transport;
use crate::types::{MessageKind, Payload};

/// A transport that does nothing
///
/// Used when no log directory could be resolved, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTransport;

impl NoOpTransport {
    /// Create a new no-op transport
    pub fn new() -> Self {
        Self
    }
}

impl Transport for NoOpTransport {
    fn write(&self, _kind: MessageKind, _message: &Payload) {}
}
