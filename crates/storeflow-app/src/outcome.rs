// Rust guideline compliant 2026-10-18

//! Outcome reporting for asynchronous actions.
//!
//! Every action ends with exactly one call to either
//! [`OutcomeResolver::report_failure`] or [`OutcomeResolver::report_success`].
//! Both commit their state changes to the sink before settling the
//! continuation, so whoever awaits the action observes the final loading,
//! error and success slots when it resumes.

use crate::continuation::Continuation;
use crate::error::Result;
use crate::store::{Mutation, MutationSink};
use crate::transport::{ErrorExtractor, PointerExtractor, TransportFailure};
use storeflow_core::{Config, ErrorPayload};

/// Result of an asynchronous action, handed to the resolver once.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T, E> {
    /// The action completed.
    Success {
        /// Message for the success slot, if the action has one.
        message: Option<String>,
        /// Value to resolve the continuation with.
        payload: T,
    },
    /// The action failed with the transport's error.
    Failure(E),
}

/// Commits outcome state and settles continuations.
#[derive(Debug, Clone)]
pub struct OutcomeResolver<X = PointerExtractor> {
    extractor: X,
    connection_error_code: String,
}

impl OutcomeResolver<PointerExtractor> {
    /// Creates a resolver with the default pointer and connection error code.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a resolver from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            extractor: PointerExtractor::from_config(config),
            connection_error_code: config.connection_error_code.clone(),
        }
    }
}

impl Default for OutcomeResolver<PointerExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: ErrorExtractor> OutcomeResolver<X> {
    /// Creates a resolver with a custom extractor.
    #[must_use]
    pub fn with_extractor(extractor: X, connection_error_code: impl Into<String>) -> Self {
        Self {
            extractor,
            connection_error_code: connection_error_code.into(),
        }
    }

    /// Returns the code recorded for failures without a response.
    #[must_use]
    pub fn connection_error_code(&self) -> &str {
        &self.connection_error_code
    }

    /// Derives the error slot value for a failed call.
    ///
    /// # Arguments
    ///
    /// * `error` - Transport error
    ///
    /// # Returns
    ///
    /// The backend's error payload taken verbatim, or the connection error
    /// code when no response body carries an error field. A field with an
    /// unrecognized shape is recorded as a code holding its raw JSON text.
    pub fn error_message<E: TransportFailure>(&self, error: &E) -> ErrorPayload {
        match error.response_body() {
            Some(body) => self.extractor.extract(body).unwrap_or_else(|| {
                tracing::warn!("response body carries no error payload");
                ErrorPayload::code(self.connection_error_code.as_str())
            }),
            None => ErrorPayload::code(self.connection_error_code.as_str()),
        }
    }

    /// Reports a failed action.
    ///
    /// Clears loading, records the derived error message, then rejects the
    /// continuation with the original error.
    ///
    /// # Arguments
    ///
    /// * `error` - Transport error that ended the action
    /// * `sink` - Store mutation sink
    /// * `continuation` - Settling half of the action
    ///
    /// # Errors
    ///
    /// Returns `AppError::ContinuationClosed` if nobody awaits the action.
    /// The sink has been updated either way.
    pub fn report_failure<T, E, S>(
        &self,
        error: E,
        sink: &mut S,
        continuation: Continuation<T, E>,
    ) -> Result<()>
    where
        E: TransportFailure,
        S: MutationSink + ?Sized,
    {
        let message = self.error_message(&error);
        tracing::debug!(records = message.records().len(), "action failed");

        sink.commit(Mutation::SetLoading(false));
        sink.commit(Mutation::SetError(Some(message)));

        continuation.reject(error).inspect_err(|_| {
            tracing::warn!("failure reported for an action nobody awaits");
        })
    }

    /// Reports a successful action.
    ///
    /// Clears loading, records `message` if given, clears any stale error,
    /// then resolves the continuation with `payload`. Without a message the
    /// success slot is left as it was.
    ///
    /// # Arguments
    ///
    /// * `message` - Optional success message
    /// * `sink` - Store mutation sink
    /// * `continuation` - Settling half of the action
    /// * `payload` - Value to resolve with
    ///
    /// # Errors
    ///
    /// Returns `AppError::ContinuationClosed` if nobody awaits the action.
    /// The sink has been updated either way.
    pub fn report_success<T, E, S>(
        &self,
        message: Option<String>,
        sink: &mut S,
        continuation: Continuation<T, E>,
        payload: T,
    ) -> Result<()>
    where
        S: MutationSink + ?Sized,
    {
        tracing::debug!(with_message = message.is_some(), "action succeeded");

        sink.commit(Mutation::SetLoading(false));
        if let Some(message) = message {
            sink.commit(Mutation::SetSuccess(message));
        }
        sink.commit(Mutation::SetError(None));

        continuation.resolve(payload).inspect_err(|_| {
            tracing::warn!("success reported for an action nobody awaits");
        })
    }

    /// Dispatches an outcome to the matching report.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ContinuationClosed` if nobody awaits the action.
    pub fn resolve<T, E, S>(
        &self,
        outcome: ActionOutcome<T, E>,
        sink: &mut S,
        continuation: Continuation<T, E>,
    ) -> Result<()>
    where
        E: TransportFailure,
        S: MutationSink + ?Sized,
    {
        match outcome {
            ActionOutcome::Success { message, payload } => {
                self.report_success(message, sink, continuation, payload)
            }
            ActionOutcome::Failure(error) => self.report_failure(error, sink, continuation),
        }
    }
}
