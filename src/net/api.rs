//! Registration submit flow.
//!
//! Client-side (hydrate): `BrowserTransport` posts via `gloo-net`.
//! Native: the `cli` crate supplies a `reqwest` transport, tests supply mocks.
//!
//! ERROR HANDLING
//! ==============
//! `submit_registration` never returns an error. Transport and parse failures
//! are caught here, reported to the diagnostic sink, and handed back inside
//! `SubmissionOutcome` so the caller can ignore them.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde_json::Value;

use super::types::{RegistrationPayload, SubmissionFailure, SubmissionOutcome};
use crate::diagnostics::DiagnosticSink;
use crate::state::registration::RegistrationForm;

/// Relative path of the registration endpoint.
pub const REGISTER_ENDPOINT: &str = "/api/register";

/// Sends a JSON body and parses the JSON response.
///
/// Implementations must set `Content-Type: application/json`, must not
/// configure a timeout, and must not inspect the HTTP status.
#[async_trait(?Send)]
pub trait RegistrationTransport {
    async fn post_json(&self, path: &str, payload: &RegistrationPayload) -> Result<Value, SubmissionFailure>;
}

/// Submit the current form contents once.
///
/// Emits the payload before the request and exactly one of response or
/// failure after it. The form is only read; calling this repeatedly issues
/// one independent request per call.
pub async fn submit_registration<T, S>(form: &RegistrationForm, transport: &T, sink: &S) -> SubmissionOutcome
where
    T: RegistrationTransport + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let payload = form.payload();
    sink.payload(&payload);

    match transport.post_json(REGISTER_ENDPOINT, &payload).await {
        Ok(body) => {
            sink.response(&body);
            SubmissionOutcome::Response(body)
        }
        Err(failure) => {
            sink.failure(&failure);
            SubmissionOutcome::Failed(failure)
        }
    }
}

/// Same-origin `fetch` transport for the browser.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl RegistrationTransport for BrowserTransport {
    async fn post_json(&self, path: &str, payload: &RegistrationPayload) -> Result<Value, SubmissionFailure> {
        let resp = gloo_net::http::Request::post(path).json(payload)?.send().await?;
        Ok(resp.json::<Value>().await?)
    }
}
