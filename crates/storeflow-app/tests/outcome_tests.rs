// Rust guideline compliant 2026-10-18

//! Integration tests for outcome reporting.
//!
//! These tests check commit ordering against continuation settlement and
//! the end-to-end flow from a failed call to localized messages.

use serde_json::json;
use std::sync::{Arc, Mutex};
use storeflow_app::{
    continuation, format_error_messages, ActionOutcome, MessageCatalog, Mutation, MutationSink,
    OutcomeResolver, Pending, StatusSlots, TransportError,
};
use storeflow_core::{Config, ErrorPayload};

/// Sink that records each mutation together with whether the continuation
/// had already settled when the mutation arrived.
struct SettlementSpy<T, E> {
    pending: Pending<T, E>,
    settled: Option<Result<T, E>>,
    log: Vec<(Mutation, bool)>,
}

impl<T, E> SettlementSpy<T, E> {
    fn new(pending: Pending<T, E>) -> Self {
        Self {
            pending,
            settled: None,
            log: Vec::new(),
        }
    }

    fn mutations(&self) -> Vec<Mutation> {
        self.log.iter().map(|(mutation, _)| mutation.clone()).collect()
    }

    fn into_settled(mut self) -> Option<Result<T, E>> {
        self.settled.take().or_else(|| self.pending.try_take())
    }
}

impl<T, E> MutationSink for SettlementSpy<T, E> {
    fn commit(&mut self, mutation: Mutation) {
        if self.settled.is_none() {
            self.settled = self.pending.try_take();
        }
        let settled = self.settled.is_some();
        self.log.push((mutation, settled));
    }
}

#[derive(Clone, Default)]
struct SharedSlots(Arc<Mutex<StatusSlots>>);

impl MutationSink for SharedSlots {
    fn commit(&mut self, mutation: Mutation) {
        self.0.lock().unwrap().commit(mutation);
    }
}

#[test]
fn test_failure_commits_in_order_before_reject() {
    let resolver = OutcomeResolver::new();
    let (cont, pending) = continuation::<(), TransportError>();
    let mut spy = SettlementSpy::new(pending);
    let error = TransportError::connection("timeout of 0ms exceeded");

    resolver.report_failure(error.clone(), &mut spy, cont).unwrap();

    assert_eq!(
        spy.mutations(),
        vec![
            Mutation::SetLoading(false),
            Mutation::SetError(Some(ErrorPayload::code("SERVER_TIMEOUT_CONNECTION_ERROR"))),
        ]
    );
    assert!(spy.log.iter().all(|(_, settled)| !settled));
    assert_eq!(spy.into_settled(), Some(Err(error)));
}

#[test]
fn test_success_commits_in_order_before_resolve() {
    let resolver = OutcomeResolver::new();
    let (cont, pending) = continuation::<u32, TransportError>();
    let mut spy = SettlementSpy::new(pending);

    resolver
        .report_success(Some("SAVED_SUCCESSFULLY".to_string()), &mut spy, cont, 42)
        .unwrap();

    assert_eq!(
        spy.mutations(),
        vec![
            Mutation::SetLoading(false),
            Mutation::SetSuccess("SAVED_SUCCESSFULLY".to_string()),
            Mutation::SetError(None),
        ]
    );
    assert!(spy.log.iter().all(|(_, settled)| !settled));
    assert_eq!(spy.into_settled(), Some(Ok(42)));
}

#[test]
fn test_silent_success_skips_success_slot() {
    let resolver = OutcomeResolver::new();
    let (cont, pending) = continuation::<(), TransportError>();
    let mut spy = SettlementSpy::new(pending);

    resolver.report_success(None, &mut spy, cont, ()).unwrap();

    assert_eq!(
        spy.mutations(),
        vec![Mutation::SetLoading(false), Mutation::SetError(None)]
    );
}

#[test]
fn test_failed_call_to_localized_messages() {
    let resolver = OutcomeResolver::new();
    let catalog = MessageCatalog::from_json(&json!({
        "users": {"REQUIRED": "Please fill in all required fields"}
    }));
    let mut slots = StatusSlots::new();
    let (cont, _pending) = continuation::<(), TransportError>();
    let error = TransportError::with_response(
        "Request failed with status code 422",
        422,
        json!({"errors": {"msg": [{"msg": "REQUIRED", "param": "name"}]}}),
    );

    resolver.report_failure(error, &mut slots, cont).unwrap();

    assert_eq!(
        format_error_messages("users", slots.last_error(), &catalog),
        Some(vec!["Please fill in all required fields".to_string()])
    );
}

#[test]
fn test_unrecognized_payload_recorded_verbatim() {
    let resolver = OutcomeResolver::new();
    let mut slots = StatusSlots::new();
    let (cont, _pending) = continuation::<(), TransportError>();
    let error = TransportError::with_response(
        "Request failed with status code 422",
        422,
        json!({"errors": {"msg": ["REQUIRED", "INVALID"]}}),
    );

    resolver.report_failure(error, &mut slots, cont).unwrap();

    assert_eq!(
        slots.last_error(),
        Some(&ErrorPayload::code(r#"["REQUIRED","INVALID"]"#))
    );
}

#[test]
fn test_configured_connection_code() {
    let config = Config {
        connection_error_code: "OFFLINE".to_string(),
        ..Config::default()
    };
    let resolver = OutcomeResolver::from_config(&config);
    let mut slots = StatusSlots::new();
    let (cont, _pending) = continuation::<(), TransportError>();

    let outcome = ActionOutcome::Failure(TransportError::connection("getaddrinfo ENOTFOUND"));
    resolver.resolve(outcome, &mut slots, cont).unwrap();

    assert_eq!(slots.last_error(), Some(&ErrorPayload::code("OFFLINE")));
}

#[test]
fn test_dyn_sink() {
    let resolver = OutcomeResolver::new();
    let mut slots = StatusSlots::new();
    let sink: &mut dyn MutationSink = &mut slots;
    let (cont, _pending) = continuation::<(), TransportError>();

    resolver.report_success(None, sink, cont, ()).unwrap();

    assert!(!slots.loading());
}

#[tokio::test]
async fn test_awaiting_caller_sees_final_state() {
    let resolver = OutcomeResolver::new();
    let mut sink = SharedSlots::default();
    sink.commit(Mutation::SetLoading(true));
    sink.commit(Mutation::SetError(Some(ErrorPayload::code("STALE"))));

    let (cont, pending) = continuation::<String, TransportError>();
    let observed = Arc::clone(&sink.0);
    let waiter = tokio::spawn(async move {
        let outcome = pending.wait().await;
        let slots = observed.lock().unwrap().clone();
        (outcome, slots)
    });

    resolver
        .report_success(None, &mut sink, cont, "done".to_string())
        .unwrap();

    let (outcome, slots) = waiter.await.unwrap();
    assert_eq!(outcome, Some(Ok("done".to_string())));
    assert!(!slots.loading());
    assert!(slots.last_error().is_none());
}
