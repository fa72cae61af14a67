//! Clients for running the pipeline's collaborators as separate services.

pub mod cache_client;
pub mod policy_client;
pub mod receipt_client;
pub mod upstream_client;

pub use cache_client::HttpAnswerCache;
pub use policy_client::HttpPolicyGate;
pub use receipt_client::HttpReceiptSink;
pub use upstream_client::HttpUpstreamResolver;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;
use tolldns_domain::DomainError;

/// Shared HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

pub(crate) fn client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// Sends a request with a hard deadline, mapping every transport failure to
/// `CollaboratorUnavailable`.
pub(crate) async fn send_bounded<F>(
    collaborator: &'static str,
    url: &str,
    timeout: Duration,
    request: F,
) -> Result<Response, DomainError>
where
    F: Future<Output = Result<Response, reqwest::Error>>,
{
    tokio::time::timeout(timeout, request)
        .await
        .map_err(|_| {
            DomainError::unavailable(
                collaborator,
                format!("timeout after {}ms calling {url}", timeout.as_millis()),
            )
        })?
        .map_err(|e| DomainError::unavailable(collaborator, format!("request to {url} failed: {e}")))
}

pub(crate) fn unexpected_status(collaborator: &'static str, url: &str, status: StatusCode) -> DomainError {
    DomainError::unavailable(
        collaborator,
        format!(
            "{url} returned HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
    )
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    collaborator: &'static str,
    url: &str,
    timeout: Duration,
    response: Response,
) -> Result<T, DomainError> {
    tokio::time::timeout(timeout, response.json::<T>())
        .await
        .map_err(|_| {
            DomainError::unavailable(collaborator, format!("timeout reading response from {url}"))
        })?
        .map_err(|e| DomainError::unavailable(collaborator, format!("malformed response from {url}: {e}")))
}
