use super::{client, read_json, send_bounded, unexpected_status};
use async_trait::async_trait;
use std::time::Duration;
use tolldns_application::ports::UpstreamResolver;
use tolldns_domain::{DomainError, Name, UpstreamAnswer};

const COLLABORATOR: &str = "upstream quorum";

/// Remote quorum service: `GET <url>?name=`.
pub struct HttpUpstreamResolver {
    url: String,
    timeout: Duration,
}

impl HttpUpstreamResolver {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl UpstreamResolver for HttpUpstreamResolver {
    async fn query(&self, name: &Name) -> Result<UpstreamAnswer, DomainError> {
        let response = send_bounded(
            COLLABORATOR,
            &self.url,
            self.timeout,
            client()
                .get(&self.url)
                .query(&[("name", name.as_str())])
                .send(),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status(COLLABORATOR, &self.url, status));
        }
        read_json(COLLABORATOR, &self.url, self.timeout, response).await
    }
}
