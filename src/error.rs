//! Application-wide error types.
//!
//! Validation messages are data and never show up here. These cover the
//! operational faults: snapshot files, the terminal, and logging setup.

pub use crate::config::ConfigError;

/// Top-level error for the CLI and TUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Snapshot / configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors, including terminal setup and drawing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Serializing output failed
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
