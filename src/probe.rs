//! Probe runner.
//!
//! Sends one GET to the target, classifies the response, and reports an exit code.
//! No retries and no explicit timeout: a target that never answers keeps the
//! probe waiting for as long as the transport does.

use std::process::ExitCode;

use reqwest::StatusCode;

use crate::config::{EXPECTED_STATUS, TARGET_URL};
use crate::error::ProbeError;

/// Result of a single probe.
#[derive(Debug)]
pub enum ProbeOutcome {
    Healthy { status: StatusCode },
    Unhealthy(ProbeError),
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy { .. })
    }

    /// Raw process exit status: 0 when healthy, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.is_healthy() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl From<Result<StatusCode, ProbeError>> for ProbeOutcome {
    fn from(result: Result<StatusCode, ProbeError>) -> Self {
        match result {
            Ok(status) => ProbeOutcome::Healthy { status },
            Err(e) => ProbeOutcome::Unhealthy(e),
        }
    }
}

/// HTTP client used for probing.
///
/// Proxy environment variables are ignored: the target is always local, and a
/// proxy answering on its behalf would report a dead target as healthy.
pub fn client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().no_proxy().build()
}

/// Probe the fixed target.
pub async fn run() -> ProbeOutcome {
    let client = match client() {
        Ok(client) => client,
        Err(e) => return ProbeOutcome::Unhealthy(e.into()),
    };
    check(&client, TARGET_URL).await
}

/// Send one GET to `url` and classify the response.
///
/// Redirects follow the client's policy; only the final status counts.
/// The body is never read.
pub async fn check(client: &reqwest::Client, url: &str) -> ProbeOutcome {
    tracing::debug!(%url, "Sending probe request");

    let outcome = ProbeOutcome::from(fetch_status(client, url).await);

    match &outcome {
        ProbeOutcome::Healthy { status } => {
            tracing::info!(%url, status = status.as_u16(), "Probe healthy");
        }
        ProbeOutcome::Unhealthy(e) => {
            tracing::warn!(
                %url,
                error = %e,
                status = e.status().map(|s| s.as_u16()),
                "Probe unhealthy"
            );
        }
    }

    outcome
}

async fn fetch_status(client: &reqwest::Client, url: &str) -> Result<StatusCode, ProbeError> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if status != EXPECTED_STATUS {
        return Err(ProbeError::UnexpectedStatus { status });
    }

    Ok(status)
}
