//! Native driver for the registration test form.
//!
//! Fills a `RegistrationForm` from flags and environment, then runs the same
//! submit flow the browser page runs, over `reqwest` and with `tracing` as
//! the diagnostic channel.


#[cfg(test)]
mod test_helpers;

pub mod transport;

use clap::Parser;
use futures_util::future::join_all;
use register_harness::diagnostics::DiagnosticSink;
use register_harness::net::api::submit_registration;
use register_harness::net::types::SubmissionOutcome;
use register_harness::state::registration::RegistrationForm;

pub use transport::ReqwestTransport;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(#[from] reqwest::Error),
    #[error("--repeat must be at least 1")]
    ZeroRepeat,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "register-cli", about = "Submit a test registration and log the response")]
pub struct Cli {
    #[arg(long, env = "REGISTER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "REGISTER_USERNAME", default_value = "")]
    pub username: String,

    #[arg(long, env = "REGISTER_EMAIL", default_value = "")]
    pub email: String,

    #[arg(long, env = "REGISTER_PASSWORD", default_value = "")]
    pub password: String,

    /// Number of concurrent, independent submissions.
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,
}

impl Cli {
    #[must_use]
    pub fn form(&self) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_username(self.username.as_str());
        form.set_email(self.email.as_str());
        form.set_password(self.password.as_str());
        form
    }
}

/// Run `cli.repeat` submissions concurrently and return their outcomes in
/// launch order.
///
/// # Errors
///
/// Only setup problems are errors. Failed submissions are reported to `sink`
/// and returned as `SubmissionOutcome::Failed`.
pub async fn run<S>(cli: &Cli, sink: &S) -> Result<Vec<SubmissionOutcome>, CliError>
where
    S: DiagnosticSink + ?Sized,
{
    if cli.repeat == 0 {
        return Err(CliError::ZeroRepeat);
    }
    let transport = ReqwestTransport::new(&cli.base_url)?;
    let form = cli.form();

    tracing::debug!(base_url = transport.base_url(), repeat = cli.repeat, "starting submissions");
    let outcomes = join_all((0..cli.repeat).map(|_| submit_registration(&form, &transport, sink))).await;
    Ok(outcomes)
}
