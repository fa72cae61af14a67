use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tolldns_domain::{
    Answer, DomainError, Name, PolicyDecision, ResolutionResult, ResolutionSource,
};
use tracing::{debug, info, instrument, warn};

use crate::ports::{AnswerCache, PolicyGate, ReceiptSink, UpstreamResolver};

pub const DEFAULT_COLLABORATOR_TIMEOUT: Duration = Duration::from_secs(2);

/// Policy -> cache -> upstream -> cache fill -> receipt.
///
/// Transport-agnostic and stateless between calls: every front door runs the
/// same steps in the same order. Only a missing answer fails the request;
/// every other collaborator failure degrades in place.
pub struct ResolveNameUseCase {
    policy: Arc<dyn PolicyGate>,
    cache: Arc<dyn AnswerCache>,
    upstream: Arc<dyn UpstreamResolver>,
    receipts: Arc<dyn ReceiptSink>,
    timeout: Duration,
}

impl ResolveNameUseCase {
    pub fn new(
        policy: Arc<dyn PolicyGate>,
        cache: Arc<dyn AnswerCache>,
        upstream: Arc<dyn UpstreamResolver>,
        receipts: Arc<dyn ReceiptSink>,
    ) -> Self {
        Self {
            policy,
            cache,
            upstream,
            receipts,
            timeout: DEFAULT_COLLABORATOR_TIMEOUT,
        }
    }

    /// Bound applied to each collaborator call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self), fields(name = %name))]
    pub async fn execute(&self, name: &Name) -> Result<ResolutionResult, DomainError> {
        let policy = self.lookup_policy().await;

        let (answer, source) = match self.lookup_cache(name).await {
            Some(answer) => (answer, ResolutionSource::Cache),
            None => match self.query_upstream(name).await {
                Some(answer) => {
                    self.fill_cache(name, &answer).await;
                    (answer, ResolutionSource::UpstreamQuorum)
                }
                None => {
                    warn!(name = %name, "No answer from cache or upstream");
                    return Err(DomainError::UpstreamUnavailable(name.to_string()));
                }
            },
        };

        let result = ResolutionResult {
            name: name.clone(),
            policy,
            answer,
            source: Some(source),
        };

        self.submit_receipt(&result).await;

        info!(
            name = %name,
            policy = %result.policy.state,
            source = %source,
            "Name resolved"
        );
        Ok(result)
    }

    async fn lookup_policy(&self) -> PolicyDecision {
        match self.bounded("policy gate", self.policy.current_policy()).await {
            Ok(decision) => decision,
            Err(e) => {
                warn!(error = %e, "Policy gate unavailable, degrading to UNKNOWN");
                PolicyDecision::unknown()
            }
        }
    }

    async fn lookup_cache(&self, name: &Name) -> Option<Answer> {
        match self.bounded("cache", self.cache.get(name)).await {
            Ok(Some(answer)) => {
                debug!(name = %name, "Cache HIT");
                Some(answer)
            }
            Ok(None) => {
                debug!(name = %name, "Cache MISS");
                None
            }
            Err(e) => {
                warn!(name = %name, error = %e, "Cache lookup failed, treating as miss");
                None
            }
        }
    }

    async fn query_upstream(&self, name: &Name) -> Option<Answer> {
        match self.bounded("upstream quorum", self.upstream.query(name)).await {
            Ok(reply) => {
                debug!(
                    name = %name,
                    upstreams = reply.upstreams.len(),
                    required = reply.quorum.required,
                    responded = reply.quorum.responded,
                    "Upstream quorum answered"
                );
                Some(reply.answer())
            }
            Err(e) => {
                warn!(name = %name, error = %e, "Upstream quorum unavailable");
                None
            }
        }
    }

    async fn fill_cache(&self, name: &Name, answer: &Answer) {
        if let Err(e) = self
            .bounded("cache", self.cache.put(name, answer.clone()))
            .await
        {
            warn!(name = %name, error = %e, "Cache fill failed");
        }
    }

    /// Runs the submission as its own task so a dropped request cannot cancel
    /// the audit write; the wait is bounded and failures never propagate.
    async fn submit_receipt(&self, result: &ResolutionResult) {
        let receipts = Arc::clone(&self.receipts);
        let record = result.clone();
        let limit = self.timeout;

        let task =
            tokio::spawn(async move { timeout(limit, receipts.submit(&record)).await });

        match task.await {
            Ok(Ok(Ok(ticket))) => {
                debug!(receipt_id = %ticket.id, location = %ticket.location, "Receipt recorded");
            }
            Ok(Ok(Err(e))) => warn!(error = %e, "Receipt submission failed"),
            Ok(Err(_)) => warn!(timeout_ms = limit.as_millis() as u64, "Receipt submission timed out"),
            Err(e) => warn!(error = %e, "Receipt task aborted"),
        }
    }

    async fn bounded<T, F>(&self, collaborator: &'static str, call: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        timeout(self.timeout, call).await.map_err(|_| {
            DomainError::unavailable(
                collaborator,
                format!("timed out after {}ms", self.timeout.as_millis()),
            )
        })?
    }
}
