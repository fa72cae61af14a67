use super::{client, read_json, send_bounded, unexpected_status};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use tolldns_application::ports::AnswerCache;
use tolldns_domain::{Answer, DomainError, Name};
use tracing::debug;

const COLLABORATOR: &str = "cache";

#[derive(Serialize)]
struct StoreRequest<'a> {
    name: &'a Name,
    record: &'a Answer,
}

/// Remote cache service: `GET <url>?name=` and `POST <url>`.
pub struct HttpAnswerCache {
    url: String,
    timeout: Duration,
}

impl HttpAnswerCache {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl AnswerCache for HttpAnswerCache {
    async fn get(&self, name: &Name) -> Result<Option<Answer>, DomainError> {
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

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!(name = %name, "Remote cache miss");
                Ok(None)
            }
            s if s.is_success() => read_json(COLLABORATOR, &self.url, self.timeout, response)
                .await
                .map(Some),
            s => Err(unexpected_status(COLLABORATOR, &self.url, s)),
        }
    }

    async fn put(&self, name: &Name, answer: Answer) -> Result<(), DomainError> {
        let body = StoreRequest {
            name,
            record: &answer,
        };
        let response = send_bounded(
            COLLABORATOR,
            &self.url,
            self.timeout,
            client().post(&self.url).json(&body).send(),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status(COLLABORATOR, &self.url, status));
        }
        Ok(())
    }
}
