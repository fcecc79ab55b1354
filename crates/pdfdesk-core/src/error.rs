//! Error types for pdfdesk Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Launcher error types
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid asset path: {}", path.display())]
    InvalidAssetPath { path: PathBuf },

    // Host errors
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    #[error("Failed to navigate to {url}: {reason}")]
    Navigation { url: String, reason: String },

    // Lifecycle errors
    #[error("Host runtime dropped the readiness signal without firing it")]
    ReadinessLost,

    #[error("Invalid launcher state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a window creation error
    pub fn window(msg: impl ToString) -> Self {
        Error::WindowCreation(msg.to_string())
    }

    /// Returns the error code used in log records
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::InvalidAssetPath { .. } => "INVALID_ASSET_PATH",
            Error::WindowCreation(_) => "WINDOW_CREATION",
            Error::Navigation { .. } => "NAVIGATION",
            Error::ReadinessLost => "READINESS_LOST",
            Error::InvalidStateTransition { .. } => "INVALID_STATE",
            Error::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::ReadinessLost.error_code(), "READINESS_LOST");
        assert_eq!(Error::window("boom").error_code(), "WINDOW_CREATION");
        assert_eq!(
            Error::InvalidAssetPath { path: PathBuf::from("/etc/passwd") }.error_code(),
            "INVALID_ASSET_PATH"
        );
    }

    #[test]
    fn test_transition_message() {
        let err = Error::InvalidStateTransition {
            from: "window_open".to_string(),
            to: "window_open".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid launcher state transition: window_open -> window_open"
        );
    }
}
