//! File transport implementation
//!
//! Records go to `<dir>/YYYY-MM-DD.log`, named after the local date when the
//! transport is opened. The file is truncated on open, so a second run on the
//! same day replaces the first run's records.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveTime};
use parking_lot::Mutex;

use super::traits::Transport;
use crate::error::LogResult;
use crate::types::{MessageKind, Payload};

/// Open log file and the path it lives at
struct LogFile {
    path: PathBuf,
    file: Mutex<File>,
}

/// A transport that appends records to a dated log file
///
/// When no directory is available the transport is disabled and silently
/// drops every record. The file handle is released when the transport is
/// dropped.
pub struct FileTransport {
    inner: Option<LogFile>,
}

impl FileTransport {
    /// Open the log file inside `directory`
    ///
    /// Never fails: a missing directory or an open error yields a disabled
    /// transport.
    pub fn open(directory: Option<&Path>) -> Self {
        directory
            .and_then(|dir| Self::try_open(dir).ok())
            .unwrap_or_else(Self::disabled)
    }

    /// Open the log file inside `directory`, reporting I/O errors
    pub fn try_open(directory: &Path) -> LogResult<Self> {
        let path = directory.join(log_file_name(Local::now().date_naive()));
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        Ok(Self {
            inner: Some(LogFile {
                path,
                file: Mutex::new(file),
            }),
        })
    }

    /// Create a transport that drops everything
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Whether records are actually written
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Path of the open log file
    pub fn path(&self) -> Option<&Path> {
        self.inner.as_ref().map(|log| log.path.as_path())
    }
}

/// File name for a given day, e.g. `2024-06-03.log`
pub fn log_file_name(date: NaiveDate) -> String {
    format!("{}.log", date.format("%Y-%m-%d"))
}

/// Format one record: `[HH:MM:SS][KIND]message`
///
/// No line terminator is appended.
pub fn format_record(time: NaiveTime, kind: MessageKind, message: &Payload) -> String {
    format!("[{}][{}]{}", time.format("%H:%M:%S"), kind.tag(), message)
}

impl Transport for FileTransport {
    fn write(&self, kind: MessageKind, message: &Payload) {
        let Some(log) = &self.inner else {
            return;
        };

        let record = format_record(Local::now().time(), kind, message);
        let mut file = log.file.lock();
        let _ = file.write_all(record.as_bytes());
    }
}

impl std::fmt::Debug for FileTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileTransport")
            .field("path", &self.path())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn read(transport: &FileTransport) -> String {
        fs::read_to_string(transport.path().unwrap()).unwrap()
    }

    #[test]
    fn test_log_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(log_file_name(date), "2024-06-03.log");
    }

    #[test]
    fn test_format_record() {
        let time = NaiveTime::from_hms_opt(9, 5, 7).unwrap();

        assert_eq!(
            format_record(time, MessageKind::Info, &"started".into()),
            "[09:05:07][INFO]started"
        );
        assert_eq!(
            format_record(time, MessageKind::Warn, &"low disk".into()),
            "[09:05:07][WARN]low disk"
        );
        assert_eq!(
            format_record(time, MessageKind::Error, &"crashed".into()),
            "[09:05:07][ERROR]crashed"
        );
        assert_eq!(
            format_record(time, MessageKind::Verbose, &"details".into()),
            "[09:05:07][VERBOSE]details"
        );
    }

    #[test]
    fn test_open_creates_dated_file() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = FileTransport::open(Some(tmp.path()));

        assert!(transport.is_enabled());
        let path = transport.path().unwrap();
        assert_eq!(path.parent(), Some(tmp.path()));

        let name = path.file_name().unwrap().to_str().unwrap();
        let date = name.strip_suffix(".log").unwrap();
        assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_writes_append_without_delimiter() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = FileTransport::open(Some(tmp.path()));

        transport.write(MessageKind::Info, &"one".into());
        transport.write(MessageKind::Error, &"two\n".into());

        let contents = read(&transport);
        assert!(contents.contains("[INFO]one["));
        assert!(contents.ends_with("[ERROR]two\n"));
        assert_eq!(contents.matches('\n').count(), 1);
    }

    #[test]
    fn test_structured_payload_is_json() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = FileTransport::open(Some(tmp.path()));

        let payload = json!({"window": {"width": 800, "maximized": false}, "ids": [1, 2]});
        let expected = payload.to_string();
        transport.write(MessageKind::Warn, &payload.into());

        let contents = read(&transport);
        assert!(contents.contains(&expected));
        assert!(contents.contains("[WARN]"));
    }

    #[test]
    fn test_serialized_struct_keeps_field_order() {
        #[derive(serde::Serialize)]
        struct WindowState {
            width: u32,
            height: u32,
            title: String,
            maximized: bool,
        }

        let tmp = tempfile::tempdir().unwrap();
        let transport = FileTransport::open(Some(tmp.path()));

        let state = WindowState {
            width: 800,
            height: 600,
            title: "Main".to_string(),
            maximized: false,
        };
        let canonical = serde_json::to_string(&state).unwrap();
        transport.write(MessageKind::Info, &Payload::json(&state).unwrap());

        let contents = read(&transport);
        assert!(contents.contains(&format!("[INFO]{}", canonical)));
        assert!(contents.contains(r#"{"width":800,"height":600,"title":"Main","maximized":false}"#));
    }

    #[test]
    fn test_reopen_truncates() {
        let tmp = tempfile::tempdir().unwrap();

        let first = FileTransport::open(Some(tmp.path()));
        first.write(MessageKind::Info, &"first run".into());
        let path = first.path().unwrap().to_path_buf();
        drop(first);

        let second = FileTransport::open(Some(tmp.path()));
        assert_eq!(second.path(), Some(path.as_path()));
        second.write(MessageKind::Info, &"second run".into());

        let contents = read(&second);
        assert!(!contents.contains("first run"));
        assert!(contents.contains("second run"));
    }

    #[test]
    fn test_missing_directory_is_disabled() {
        let transport = FileTransport::open(None);
        assert!(!transport.is_enabled());
        assert_eq!(transport.path(), None);

        // Dropped without error
        transport.write(MessageKind::Error, &"lost".into());
    }

    #[test]
    fn test_unopenable_directory_is_disabled() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("does-not-exist");

        assert!(FileTransport::try_open(&missing).is_err());
        assert!(!FileTransport::open(Some(missing.as_path())).is_enabled());
    }
}
