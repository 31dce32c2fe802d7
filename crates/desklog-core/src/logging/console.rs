//! Console transport implementation

use std::io::{self, Write};

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;

use super::traits::Transport;
use crate::types::{ConsoleStream, MessageKind, Payload};

type Sink = Mutex<Box<dyn Write + Send>>;

/// A transport that outputs to the console (stdout/stderr)
///
/// Every record is preceded by a line holding the local time in long form.
/// Warnings and errors go to stderr, everything else to stdout.
pub struct ConsoleTransport {
    out: Sink,
    err: Sink,
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTransport {
    /// Create a console transport bound to the process stdout/stderr
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Create a console transport with custom output streams
    pub fn with_writers(
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn sink(&self, stream: ConsoleStream) -> &Sink {
        match stream {
            ConsoleStream::Stdout => &self.out,
            ConsoleStream::Stderr => &self.err,
        }
    }
}

/// Long human-readable timestamp, e.g. `Jun 3, 2024 2:15 PM`
pub fn console_timestamp(time: &NaiveDateTime) -> String {
    time.format("%b %-d, %Y %-I:%M %p").to_string()
}

impl Transport for ConsoleTransport {
    fn write(&self, kind: MessageKind, message: &Payload) {
        let stamp = console_timestamp(&Local::now().naive_local());
        {
            let mut out = self.out.lock();
            let _ = writeln!(out, "[{}]", stamp);
            let _ = out.flush();
        }

        let mut sink = self.sink(kind.console_stream()).lock();
        let _ = writeln!(sink, "{}", message);
        let _ = sink.flush();
    }
}

// Implement Debug manually since the boxed writers don't implement Debug
impl std::fmt::Debug for ConsoleTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleTransport").finish_non_exhaustive()
    }
}
