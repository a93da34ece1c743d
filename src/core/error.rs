//! Error types for the logger

use std::io;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Sink write failure, propagated verbatim
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Error reported by an installed output override
    #[error("Output override failed: {0}")]
    Override(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an override error
    pub fn override_failed<S: Into<String>>(msg: S) -> Self {
        LoggerError::Override(msg.into())
    }
}

impl From<LoggerError> for io::Error {
    fn from(err: LoggerError) -> Self {
        match err {
            LoggerError::Io(source) | LoggerError::IoOperation { source, .. } => source,
            other => io::Error::other(other),
        }
    }
}
