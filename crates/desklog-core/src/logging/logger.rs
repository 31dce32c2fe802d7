//! Level-gated logger

use super::traits::{SharedTransport, Transport};
use crate::types::{LogLevel, MessageKind, Payload};

/// Decide whether a message of `kind` passes a logger set to `level`
///
/// - `Silent`: nothing passes
/// - `Low`: only `Error` passes
/// - `High`: everything passes
pub fn should_emit(level: LogLevel, kind: MessageKind) -> bool {
    match level {
        LogLevel::Silent => false,
        LogLevel::Low => kind == MessageKind::Error,
        LogLevel::High => true,
    }
}

/// Logger bound to a single transport
///
/// The level is fixed at construction; logging never mutates the logger.
///
/// # Example
///
/// ```
/// use desklog_core::logging::{dev_log, Logger};
/// use desklog_core::LogLevel;
///
/// let log = Logger::new(LogLevel::High, dev_log());
/// log.info("window opened");
/// ```
#[derive(Clone)]
pub struct Logger {
    level: LogLevel,
    transport: SharedTransport,
}

impl Logger {
    pub fn new(level: LogLevel, transport: SharedTransport) -> Self {
        Self { level, transport }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a message of `kind` would reach the transport
    pub fn enabled(&self, kind: MessageKind) -> bool {
        should_emit(self.level, kind)
    }

    /// Log a message of any kind
    pub fn log(&self, kind: MessageKind, message: impl Into<Payload>) {
        if !self.enabled(kind) {
            return;
        }
        self.transport.write(kind, &message.into());
    }

    /// Log an info message
    pub fn info(&self, message: impl Into<Payload>) {
        self.log(MessageKind::Info, message);
    }

    /// Log a warning message
    pub fn warn(&self, message: impl Into<Payload>) {
        self.log(MessageKind::Warn, message);
    }

    /// Log an error message
    pub fn error(&self, message: impl Into<Payload>) {
        self.log(MessageKind::Error, message);
    }

    /// Log a message with no specific kind
    pub fn verbose(&self, message: impl Into<Payload>) {
        self.log(MessageKind::Verbose, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;

    const KINDS: [MessageKind; 4] = [
        MessageKind::Info,
        MessageKind::Warn,
        MessageKind::Error,
        MessageKind::Verbose,
    ];

    /// Transport that remembers everything it was given
    #[derive(Default)]
    pub(crate) struct RecordingTransport {
        pub(crate) records: Mutex<Vec<(MessageKind, String)>>,
    }

    impl Transport for RecordingTransport {
        fn write(&self, kind: MessageKind, message: &Payload) {
            self.records.lock().push((kind, message.to_string()));
        }
    }

    pub(crate) fn recording(level: LogLevel) -> (Logger, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::default());
        let logger = Logger::new(level, transport.clone());
        (logger, transport)
    }

    #[test]
    fn test_gate_table() {
        for kind in KINDS {
            assert!(!should_emit(LogLevel::Silent, kind));
            assert!(should_emit(LogLevel::High, kind));
            assert_eq!(should_emit(LogLevel::Low, kind), kind == MessageKind::Error);
        }
    }

    #[test]
    fn test_silent_never_reaches_transport() {
        let (logger, transport) = recording(LogLevel::Silent);
        logger.info("a");
        logger.warn("b");
        logger.error("c");
        logger.verbose("d");
        assert!(transport.records.lock().is_empty());
    }

    #[test]
    fn test_low_only_forwards_errors() {
        let (logger, transport) = recording(LogLevel::Low);

        logger.warn("x");
        assert!(transport.records.lock().is_empty());

        logger.error("x");
        assert_eq!(
            *transport.records.lock(),
            vec![(MessageKind::Error, "x".to_string())]
        );
    }

    #[test]
    fn test_high_forwards_everything() {
        let (logger, transport) = recording(LogLevel::High);
        logger.info("1");
        logger.warn("2");
        logger.error("3");
        logger.log(MessageKind::Verbose, "4");

        let kinds: Vec<MessageKind> = transport.records.lock().iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, KINDS.to_vec());
    }

    #[test]
    fn test_structured_message() {
        let (logger, transport) = recording(LogLevel::High);
        logger.info(json!({"a": [1, 2]}));
        logger.warn(Payload::display(3.5));

        let records = transport.records.lock();
        assert_eq!(records[0].1, r#"{"a":[1,2]}"#);
        assert_eq!(records[1].1, "3.5");
    }

    #[test]
    fn test_gating_does_not_mutate() {
        let (logger, _) = recording(LogLevel::Low);
        logger.info("dropped");
        logger.error("kept");
        assert_eq!(logger.level(), LogLevel::Low);
        assert!(logger.enabled(MessageKind::Error));
        assert!(!logger.enabled(MessageKind::Info));
    }
}
