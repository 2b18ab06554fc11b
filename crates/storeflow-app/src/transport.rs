// Rust guideline compliant 2026-10-18

//! Transport error shape and error payload extraction.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use storeflow_core::{Config, ErrorPayload};

/// Response attached to a failed call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded response body.
    #[serde(default)]
    pub data: Value,
}

/// Error produced by the transport layer for a failed call.
///
/// A missing `response` means the request never got an answer: timeout,
/// DNS failure, refused connection, blocked by CORS and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportError {
    /// Transport-level description.
    pub message: String,
    /// Response, if the server answered.
    #[serde(default)]
    pub response: Option<TransportResponse>,
}

impl TransportError {
    /// Creates an error for a call that received no response.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    /// Creates an error for a call answered with an error response.
    #[must_use]
    pub fn with_response(message: impl Into<String>, status: u16, data: Value) -> Self {
        Self {
            message: message.into(),
            response: Some(TransportResponse { status, data }),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.response {
            Some(response) => write!(f, "{} (status {})", self.message, response.status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for TransportError {}

/// Errors that may carry a structured response body.
pub trait TransportFailure {
    /// Returns the decoded response body, or `None` for connection failures.
    fn response_body(&self) -> Option<&Value>;
}

impl TransportFailure for TransportError {
    fn response_body(&self) -> Option<&Value> {
        self.response.as_ref().map(|response| &response.data)
    }
}

/// Pulls the error payload out of a response body.
pub trait ErrorExtractor {
    /// Returns the payload, or `None` if the body carries no error field.
    fn extract(&self, body: &Value) -> Option<ErrorPayload>;
}

/// Extractor that reads the payload at a JSON pointer, `/errors/msg` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerExtractor {
    pointer: String,
}

impl PointerExtractor {
    /// Creates an extractor for the given JSON pointer.
    #[must_use]
    pub fn new(pointer: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
        }
    }

    /// Creates an extractor using the configured pointer.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.error_pointer.clone())
    }

    /// Returns the JSON pointer.
    #[must_use]
    pub fn pointer(&self) -> &str {
        &self.pointer
    }
}

impl Default for PointerExtractor {
    fn default() -> Self {
        Self::new(storeflow_core::config::ERROR_POINTER)
    }
}

impl ErrorExtractor for PointerExtractor {
    fn extract(&self, body: &Value) -> Option<ErrorPayload> {
        let value = body.pointer(&self.pointer)?;
        match ErrorPayload::from_value(value) {
            Ok(payload) => Some(payload),
            Err(err) => {
                // The backend did answer; keep what it sent as the code.
                tracing::warn!(pointer = %self.pointer, error = %err, "unrecognized error payload");
                Some(ErrorPayload::code(value.to_string()))
            }
        }
    }
}
