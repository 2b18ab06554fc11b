// Rust guideline compliant 2026-10-18

//! Error payload shapes returned by remote calls.
//!
//! Backends report failures either as a bare error code, a single record
//! `{"msg": "CODE"}`, or a list of such records (one per failed field).
//! The shape is decided once, when the payload is deserialized, and carried
//! as an `ErrorPayload` from then on.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::slice;

/// A single error record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Error code, used as the translation key suffix.
    pub msg: String,
    /// Request parameter the error refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl ErrorRecord {
    /// Creates a record carrying only an error code.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
        }
    }
}

/// One or many error records. Absence of an error is `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    /// A single error.
    Single(ErrorRecord),
    /// Several errors, in the order the backend reported them.
    Many(Vec<ErrorRecord>),
}

impl ErrorPayload {
    /// Creates a single-record payload from an error code.
    #[must_use]
    pub fn code(msg: impl Into<String>) -> Self {
        ErrorPayload::Single(ErrorRecord::new(msg))
    }

    /// Parses a payload from an untyped JSON value.
    ///
    /// # Arguments
    ///
    /// * `value` - JSON string, `{msg}` object, or array of `{msg}` objects
    ///
    /// # Returns
    ///
    /// The typed payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has none of the accepted shapes,
    /// including arrays whose elements lack a string `msg`.
    pub fn from_value(value: &Value) -> crate::Result<Self> {
        Ok(ErrorPayload::deserialize(value)?)
    }

    /// Returns the records in order.
    #[must_use]
    pub fn records(&self) -> &[ErrorRecord] {
        match self {
            ErrorPayload::Single(record) => slice::from_ref(record),
            ErrorPayload::Many(records) => records,
        }
    }
}

// Records are only taken from JSON objects: serde's derived struct
// deserializer would also accept an array as positional fields.
fn record_from_value<E: de::Error>(value: Value) -> Result<ErrorRecord, E> {
    if !value.is_object() {
        return Err(E::custom(format!(
            "error record must be an object with a `msg` field, got {value}"
        )));
    }
    ErrorRecord::deserialize(value).map_err(E::custom)
}

impl<'de> Deserialize<'de> for ErrorPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(msg) => Ok(ErrorPayload::code(msg)),
            record @ Value::Object(_) => record_from_value(record).map(ErrorPayload::Single),
            Value::Array(items) => items
                .into_iter()
                .map(record_from_value)
                .collect::<Result<Vec<_>, _>>()
                .map(ErrorPayload::Many),
            other => Err(de::Error::custom(format!(
                "expected an error code, record or list of records, got {other}"
            ))),
        }
    }
}
