use async_trait::async_trait;
use tolldns_domain::{DomainError, PolicyDecision};

/// External policy source.
///
/// Implementations report transport or parse problems as errors; the
/// resolver degrades those to `UNKNOWN` itself.
#[async_trait]
pub trait PolicyGate: Send + Sync {
    async fn current_policy(&self) -> Result<PolicyDecision, DomainError>;
}
