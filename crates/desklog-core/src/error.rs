//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up or feeding a logger
///
/// Directory and filesystem errors are absorbed inside the crate and turn
/// file logging into a no-op. Only serialization and level parsing errors
/// reach callers of the public logging API.
#[derive(Error, Debug)]
pub enum LogError {
    /// No candidate directory could be created and written to
    #[error("No writable log directory found on {platform}")]
    DirectoryUnavailable { platform: String },

    /// A path segment exists but is not a directory
    #[error("Path exists and is not a directory: {}", .0.display())]
    PathConflict(PathBuf),

    /// Platform has no known log directory layout
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Payload could not be converted to text
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unrecognized log level name
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Create a directory unavailable error
    pub fn directory_unavailable(platform: impl Into<String>) -> Self {
        Self::DirectoryUnavailable {
            platform: platform.into(),
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LogError::directory_unavailable("linux");
        assert_eq!(err.to_string(), "No writable log directory found on linux");

        let err = LogError::PathConflict(PathBuf::from("/tmp/file"));
        assert_eq!(err.to_string(), "Path exists and is not a directory: /tmp/file");

        let err = LogError::UnsupportedPlatform("plan9".to_string());
        assert_eq!(err.to_string(), "Unsupported platform: plan9");
    }
}
