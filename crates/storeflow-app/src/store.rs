// Rust guideline compliant 2026-10-18

//! Mutation sink and the status slots it drives.

use serde::Serialize;
use storeflow_core::ErrorPayload;

/// A state change requested by the outcome resolver.
///
/// These are the only mutations this crate ever issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mutation {
    /// Show or hide the loading indicator.
    SetLoading(bool),
    /// Record an error, or clear it with `None`.
    SetError(Option<ErrorPayload>),
    /// Record a success message.
    SetSuccess(String),
}

/// Receiver of state mutations, typically a store adapter.
pub trait MutationSink {
    /// Applies one mutation.
    fn commit(&mut self, mutation: Mutation);
}

impl<S: MutationSink + ?Sized> MutationSink for &mut S {
    fn commit(&mut self, mutation: Mutation) {
        (**self).commit(mutation);
    }
}

/// Loading, error and success slots for a single store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSlots {
    loading: bool,
    last_error: Option<ErrorPayload>,
    last_success: Option<String>,
}

impl StatusSlots {
    /// Creates empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether an action is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Returns the last recorded error.
    #[must_use]
    pub fn last_error(&self) -> Option<&ErrorPayload> {
        self.last_error.as_ref()
    }

    /// Returns the last recorded success message.
    #[must_use]
    pub fn last_success(&self) -> Option<&str> {
        self.last_success.as_deref()
    }

    /// Sets the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Sets or clears the error slot.
    pub fn set_error(&mut self, error: Option<ErrorPayload>) {
        self.last_error = error;
    }

    /// Sets the success slot.
    pub fn set_success(&mut self, message: String) {
        self.last_success = Some(message);
    }
}

impl MutationSink for StatusSlots {
    fn commit(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetLoading(loading) => self.set_loading(loading),
            Mutation::SetError(error) => self.set_error(error),
            Mutation::SetSuccess(message) => self.set_success(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_apply_mutations() {
        let mut slots = StatusSlots::new();
        slots.commit(Mutation::SetLoading(true));
        slots.commit(Mutation::SetError(Some(ErrorPayload::code("BOOM"))));
        slots.commit(Mutation::SetSuccess("SAVED".to_string()));

        assert!(slots.loading());
        assert_eq!(slots.last_error(), Some(&ErrorPayload::code("BOOM")));
        assert_eq!(slots.last_success(), Some("SAVED"));

        slots.commit(Mutation::SetError(None));
        assert!(slots.last_error().is_none());
        assert_eq!(slots.last_success(), Some("SAVED"));
    }

    #[test]
    fn test_mutation_wire_shape() {
        let value = serde_json::to_value(Mutation::SetLoading(false)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"kind": "SET_LOADING", "payload": false})
        );
    }
}
