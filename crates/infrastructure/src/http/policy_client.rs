use super::{client, read_json, send_bounded, unexpected_status};
use async_trait::async_trait;
use std::time::Duration;
use tolldns_application::ports::PolicyGate;
use tolldns_domain::{DomainError, PolicyDecision};
use tracing::debug;

const COLLABORATOR: &str = "policy gate";

/// `GET <url>` -> `{state, ...}`.
pub struct HttpPolicyGate {
    url: String,
    timeout: Duration,
}

impl HttpPolicyGate {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl PolicyGate for HttpPolicyGate {
    async fn current_policy(&self) -> Result<PolicyDecision, DomainError> {
        debug!(url = %self.url, "Fetching policy");
        let response = send_bounded(
            COLLABORATOR,
            &self.url,
            self.timeout,
            client().get(&self.url).send(),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status(COLLABORATOR, &self.url, status));
        }
        read_json(COLLABORATOR, &self.url, self.timeout, response).await
    }
}
