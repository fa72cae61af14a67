use async_trait::async_trait;
use tolldns_domain::{DomainError, Name, UpstreamAnswer};

#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn query(&self, name: &Name) -> Result<UpstreamAnswer, DomainError>;
}
