//! Error types for the outer surfaces of `JournalMap` (config, snapshots, binary)
//!
//! The clustering engine itself is infallible; these errors only arise while
//! loading configuration or reading journal snapshots.

use thiserror::Error;

/// Main error type for the `JournalMap` crate
#[derive(Error, Debug)]
pub enum JournalMapError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Journal snapshot errors
    #[error("Snapshot error: {message}")]
    Snapshot { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON (de)serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl JournalMapError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new snapshot error
    pub fn snapshot<S: Into<String>>(message: S) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            JournalMapError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            JournalMapError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            JournalMapError::Snapshot { message } => {
                format!("Could not read journal snapshot: {message}")
            }
            JournalMapError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
            JournalMapError::Json { .. } => {
                "Journal snapshot is not valid JSON.".to_string()
            }
            JournalMapError::General { message } => message.clone(),
        }
    }
}
