// Rust guideline compliant 2026-10-18

//! Error handling for storeflow application services.

use serde::Serialize;
use storeflow_core::Error as CoreError;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for application errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A version identifier was malformed.
    InvalidVersion,
    /// Configuration was invalid.
    InvalidConfig,
    /// The awaiting side of a continuation went away before settlement.
    ContinuationClosed,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading configuration or writing logs.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The tracing subscriber could not be installed.
    LoggingError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The receiver of a continuation was dropped before it was settled.
    ///
    /// State has already been committed when this is returned.
    #[error("Continuation receiver dropped before settlement")]
    ContinuationClosed,

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ContinuationClosed => ErrorCode::ContinuationClosed,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Logging(_) => ErrorCode::LoggingError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::InvalidVersion { .. } => ErrorCode::InvalidVersion,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }
}
