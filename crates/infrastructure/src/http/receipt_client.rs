use super::{client, read_json, send_bounded, unexpected_status};
use async_trait::async_trait;
use std::time::Duration;
use tolldns_application::ports::ReceiptSink;
use tolldns_domain::{DomainError, ReceiptTicket, ResolutionResult};

const COLLABORATOR: &str = "receipt ledger";

/// Remote receipt service: `POST <url>` with the resolution result.
pub struct HttpReceiptSink {
    url: String,
    timeout: Duration,
}

impl HttpReceiptSink {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ReceiptSink for HttpReceiptSink {
    async fn submit(&self, result: &ResolutionResult) -> Result<ReceiptTicket, DomainError> {
        let response = send_bounded(
            COLLABORATOR,
            &self.url,
            self.timeout,
            client().post(&self.url).json(result).send(),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status(COLLABORATOR, &self.url, status));
        }
        read_json(COLLABORATOR, &self.url, self.timeout, response).await
    }
}
