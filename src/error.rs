// src/error.rs

//! Unified error handling for the launcher.

use std::io;

use thiserror::Error;

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A child process could not be started
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a spawn error for the given program.
    pub fn spawn(program: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Exit status a shell would report for this error.
    ///
    /// Mirrors `sh`: 127 when the program is missing, 126 when it exists
    /// but cannot be executed, 1 for anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => 127,
            Self::Spawn { .. } => 126,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_not_found_maps_to_127() {
        let err = AppError::spawn("python3", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.exit_code(), 127);
        assert!(err.to_string().contains("python3"));
    }

    #[test]
    fn spawn_permission_denied_maps_to_126() {
        let err = AppError::spawn("python3", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.exit_code(), 126);
    }

    #[test]
    fn other_errors_map_to_1() {
        assert_eq!(AppError::config("bad").exit_code(), 1);
    }
}
