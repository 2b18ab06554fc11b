// Rust guideline compliant 2026-10-18

//! Outcome handling for client-side data-access actions.
//!
//! This crate sits between asynchronous actions and the state store: it
//! localizes error payloads, commits loading/error/success state through a
//! mutation sink, and settles the single-shot continuation the caller is
//! waiting on.

pub mod continuation;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod outcome;
pub mod store;
pub mod transport;

pub use continuation::{continuation, Continuation, Pending};
pub use error::{AppError, ErrorCode, Result};
pub use i18n::{format_error_messages, MessageCatalog, Translate};
pub use logging::{init_tracing, LogOptions};
pub use outcome::{ActionOutcome, OutcomeResolver};
pub use store::{Mutation, MutationSink, StatusSlots};
pub use transport::{
    ErrorExtractor, PointerExtractor, TransportError, TransportFailure, TransportResponse,
};
