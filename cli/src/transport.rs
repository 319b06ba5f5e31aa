//! `reqwest` implementation of the registration transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use register_harness::net::api::RegistrationTransport;
use register_harness::net::types::{RegistrationPayload, SubmissionFailure};
use reqwest::Url;
use serde_json::Value;

use crate::CliError;

/// Posts to `{base_url}{path}`. No timeout is configured.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns `CliError::InvalidBaseUrl` unless `base_url` is an absolute
    /// http(s) URL, or `CliError::HttpClientBuild` if the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let base_url = normalize_base_url(base_url)?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| CliError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CliError::InvalidBaseUrl(format!("{raw}: scheme must be http or https")));
    }
    Ok(trimmed.to_owned())
}

#[async_trait(?Send)]
impl RegistrationTransport for ReqwestTransport {
    async fn post_json(&self, path: &str, payload: &RegistrationPayload) -> Result<Value, SubmissionFailure> {
        let resp = self
            .http
            .post(self.url_for(path))
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionFailure::new(e.to_string()))?;
        tracing::debug!(status = resp.status().as_u16(), "registration endpoint replied");
        resp.json::<Value>()
            .await
            .map_err(|e| SubmissionFailure::new(e.to_string()))
    }
}
