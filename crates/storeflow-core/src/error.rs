// Rust guideline compliant 2026-10-18

//! Error types for the storeflow core library.

use thiserror::Error;

/// Result type alias for storeflow core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for storeflow core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A version identifier contained an empty or non-numeric component.
    #[error("Invalid version '{version}': component '{component}' is not a non-negative integer")]
    InvalidVersion {
        /// The full identifier as supplied.
        version: String,
        /// The offending component.
        component: String,
    },

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
