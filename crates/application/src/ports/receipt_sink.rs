use async_trait::async_trait;
use tolldns_domain::{DomainError, ReceiptTicket, ResolutionResult};

/// Audit ledger that signs and stores resolution results.
#[async_trait]
pub trait ReceiptSink: Send + Sync {
    async fn submit(&self, result: &ResolutionResult) -> Result<ReceiptTicket, DomainError>;
}
