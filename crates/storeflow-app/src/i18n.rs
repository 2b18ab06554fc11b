// Rust guideline compliant 2026-10-18

//! Localization of error payloads.

use serde_json::Value;
use std::collections::HashMap;
use storeflow_core::ErrorPayload;

/// Resolves translation keys to display strings.
///
/// Implementations are total: a missing key still yields a string, and
/// what that string is belongs to the implementation.
pub trait Translate {
    /// Returns the display string for `key`.
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Flat key-to-message catalog for one locale.
///
/// Falls back to the key itself when a message is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a nested JSON message tree.
    ///
    /// Nested objects become dotted keys, so
    /// `{"users": {"REQUIRED": "Required"}}` yields `users.REQUIRED`.
    /// Non-string leaves are ignored.
    ///
    /// # Arguments
    ///
    /// * `tree` - Nested messages
    ///
    /// # Returns
    ///
    /// The flattened catalog.
    #[must_use]
    pub fn from_json(tree: &Value) -> Self {
        let mut catalog = Self::new();
        flatten_into(&mut catalog.messages, String::new(), tree);
        catalog
    }

    /// Adds or replaces one message.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Returns the message for `key` without falling back.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the catalog holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten_into(messages: &mut HashMap<String, String>, prefix: String, node: &Value) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(messages, path, child);
            }
        }
        Value::String(message) if !prefix.is_empty() => {
            messages.insert(prefix, message.clone());
        }
        _ => {}
    }
}

impl Translate for MessageCatalog {
    fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(message) => message.to_string(),
            None => {
                tracing::debug!(key, "missing translation");
                key.to_string()
            }
        }
    }
}

/// Resolves each error record in a payload to a localized message.
///
/// Every record's `msg` is looked up as `"{namespace}.{msg}"`. A single
/// record still produces a one-element list.
///
/// # Arguments
///
/// * `namespace` - Translation key prefix for the feature area
/// * `payload` - Error payload, or `None` when there is no error
/// * `translator` - Key resolver
///
/// # Returns
///
/// `None` when there is no error, otherwise one message per record in order.
pub fn format_error_messages<T>(
    namespace: &str,
    payload: Option<&ErrorPayload>,
    translator: &T,
) -> Option<Vec<String>>
where
    T: Translate + ?Sized,
{
    let payload = payload?;
    Some(
        payload
            .records()
            .iter()
            .map(|record| translator.translate(&format!("{namespace}.{}", record.msg)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storeflow_core::ErrorRecord;

    fn echo(key: &str) -> String {
        key.to_string()
    }

    #[test]
    fn test_no_error_is_none() {
        assert_eq!(format_error_messages("users", None, &echo), None);
    }

    #[test]
    fn test_single_record_is_wrapped() {
        let payload = ErrorPayload::code("X");
        assert_eq!(
            format_error_messages("users", Some(&payload), &echo),
            Some(vec!["users.X".to_string()])
        );
    }

    #[test]
    fn test_many_records_keep_order() {
        let payload = ErrorPayload::Many(vec![ErrorRecord::new("A"), ErrorRecord::new("B")]);
        assert_eq!(
            format_error_messages("users", Some(&payload), &echo),
            Some(vec!["users.A".to_string(), "users.B".to_string()])
        );
    }

    #[test]
    fn test_empty_list_is_not_none() {
        let payload = ErrorPayload::Many(Vec::new());
        assert_eq!(
            format_error_messages("users", Some(&payload), &echo),
            Some(Vec::new())
        );
    }

    #[test]
    fn test_catalog_flattens_nested_tree() {
        let catalog = MessageCatalog::from_json(&json!({
            "users": {"REQUIRED": "This field is required", "count": 3},
            "errors": {"auth": {"EXPIRED": "Session expired"}}
        }));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("errors.auth.EXPIRED"), Some("Session expired"));
        assert_eq!(catalog.translate("users.REQUIRED"), "This field is required");
    }

    #[test]
    fn test_catalog_falls_back_to_key() {
        let mut catalog = MessageCatalog::new();
        assert!(catalog.is_empty());
        catalog.insert("users.A", "Alpha");
        assert_eq!(catalog.translate("users.B"), "users.B");
    }
}
