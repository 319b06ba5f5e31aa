//! Wire types for `POST /api/register`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed `firstName` sent with every registration.
pub const TEST_FIRST_NAME: &str = "Test";
/// Fixed `lastName` sent with every registration.
pub const TEST_LAST_NAME: &str = "User";

/// JSON body posted to the registration endpoint.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationPayload {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            first_name: TEST_FIRST_NAME.to_owned(),
            last_name: TEST_LAST_NAME.to_owned(),
        }
    }
}

/// Any failure while submitting: transport error or unparseable body.
///
/// Transport and parse failures are not distinguished. Callers only log it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submission failed: {message}")]
pub struct SubmissionFailure {
    message: String,
}

impl SubmissionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for SubmissionFailure {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for SubmissionFailure {
    fn from(e: gloo_net::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Result of one submission, as reported to the diagnostic sink.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The response body parsed as JSON. HTTP status is not inspected.
    Response(Value),
    Failed(SubmissionFailure),
}

impl SubmissionOutcome {
    pub fn is_response(&self) -> bool {
        matches!(self, Self::Response(_))
    }
}
