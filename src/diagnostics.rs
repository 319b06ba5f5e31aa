//! Diagnostic output channel for submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Developer-visible only. Nothing written here reaches the page. Native
//! builds log through `tracing`, the browser build logs to the devtools
//! console through `log` + `console_log`, and `MemorySink` (behind the
//! `test-support` feature) records emissions for tests.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

#[cfg(any(test, feature = "test-support"))]
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::net::types::{RegistrationPayload, SubmissionFailure};

/// Receiver for the two emissions each submission makes.
pub trait DiagnosticSink {
    /// Called once before the request is sent.
    fn payload(&self, payload: &RegistrationPayload);
    /// Called when the response body parsed as JSON.
    fn response(&self, body: &Value);
    /// Called when the request or the body parse failed.
    fn failure(&self, failure: &SubmissionFailure);
}

/// Render the payload the way it goes over the wire.
pub fn payload_json(payload: &RegistrationPayload) -> String {
    serde_json::to_string(payload).unwrap_or_else(|e| format!("<unserializable payload: {e}>"))
}

/// Sink backed by `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn payload(&self, payload: &RegistrationPayload) {
        tracing::info!(payload = %payload_json(payload), "submitting registration");
    }

    fn response(&self, body: &Value) {
        tracing::info!(%body, "registration response");
    }

    fn failure(&self, failure: &SubmissionFailure) {
        tracing::warn!(error = %failure, "registration failed");
    }
}

/// One recorded emission.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    Payload(RegistrationPayload),
    Response(Value),
    Failure(SubmissionFailure),
}

/// Sink that keeps every emission in order.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn push(&self, event: Diagnostic) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event);
    }
}

#[cfg(any(test, feature = "test-support"))]
impl DiagnosticSink for MemorySink {
    fn payload(&self, payload: &RegistrationPayload) {
        self.push(Diagnostic::Payload(payload.clone()));
    }

    fn response(&self, body: &Value) {
        self.push(Diagnostic::Response(body.clone()));
    }

    fn failure(&self, failure: &SubmissionFailure) {
        self.push(Diagnostic::Failure(failure.clone()));
    }
}

/// Sink that writes to the browser console.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

#[cfg(feature = "hydrate")]
impl DiagnosticSink for ConsoleSink {
    fn payload(&self, payload: &RegistrationPayload) {
        log::info!("submitting registration: {}", payload_json(payload));
    }

    fn response(&self, body: &Value) {
        log::info!("registration response: {body}");
    }

    fn failure(&self, failure: &SubmissionFailure) {
        log::error!("registration failed: {failure}");
    }
}

/// Route `log` records to the devtools console.
#[cfg(feature = "hydrate")]
pub fn init_console_logging() {
    // Errs only when a logger is already installed, which keeps that logger.
    console_log::init_with_level(log::Level::Debug).ok();
}
