use std::time::Duration;

use reqwest::{redirect::Policy, Client, StatusCode};

use crate::{domain::TargetUrl, error::ProbeError};

/// Sends the single GET request that keeps the backend from idling.
#[derive(Debug)]
pub struct KeepAliveClient {
    target: TargetUrl,
    http_client: Client,
}

impl KeepAliveClient {
    pub fn new(target: TargetUrl, timeout: Option<Duration>) -> Result<Self, ProbeError> {
        // Redirects are reported as non-200 responses, not followed
        let mut builder = Client::builder().redirect(Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ProbeError::ClientBuild)?;

        Ok(Self {
            target,
            http_client,
        })
    }

    pub fn target(&self) -> &TargetUrl {
        &self.target
    }

    /// Sends exactly one GET with no body and no custom headers.
    pub async fn ping(&self) -> Result<StatusCode, ProbeError> {
        let response = self
            .http_client
            .get(self.target.url().clone())
            .send()
            .await?;

        Ok(response.status())
    }
}

/// How a single probe ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Alive,
    UnexpectedStatus(StatusCode),
    TransportError(String),
}

impl ProbeOutcome {
    pub fn from_response(response: Result<StatusCode, ProbeError>) -> Self {
        match response {
            Ok(StatusCode::OK) => ProbeOutcome::Alive,
            Ok(status) => ProbeOutcome::UnexpectedStatus(status),
            Err(e) => ProbeOutcome::TransportError(e.description_chain()),
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self, ProbeOutcome::Alive)
    }

    /// Emits the one log line for this outcome. Failures log at ERROR so they land on stderr.
    pub fn report(&self) {
        match self {
            ProbeOutcome::Alive => tracing::info!("Server is alive"),
            ProbeOutcome::UnexpectedStatus(status) => {
                tracing::error!("Failed with status code: {}", status.as_u16())
            }
            ProbeOutcome::TransportError(message) => {
                tracing::error!("Error occurred: {}", message)
            }
        }
    }
}

/// Runs one probe against the client's target and logs the result.
///
/// Nothing is retried and no error escapes: the outcome is returned for callers
/// that care, but the process is expected to exit normally either way.
#[tracing::instrument(name = "Keep-alive probe", skip_all, fields(target_url = %client.target()))]
pub async fn run_probe(client: &KeepAliveClient) -> ProbeOutcome {
    tracing::info!("Attempting to keep server alive...");
    let outcome = ProbeOutcome::from_response(client.ping().await);
    outcome.report();
    outcome
}
