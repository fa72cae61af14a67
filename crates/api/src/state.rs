use std::sync::Arc;
use tolldns_application::use_cases::ResolveNameUseCase;
use tolldns_domain::Name;
use tolldns_infrastructure::{FilePolicySource, QuorumUpstream, ReceiptSigner, ResolutionCache};

/// DoH-style front door.
#[derive(Clone)]
pub struct ResolverState {
    pub resolve: Arc<ResolveNameUseCase>,
    /// Resolved when the request carries no usable `name`
    pub default_name: Name,
}

#[derive(Clone)]
pub struct CacheState {
    pub cache: Arc<ResolutionCache>,
}

#[derive(Clone)]
pub struct UpstreamState {
    pub upstream: Arc<QuorumUpstream>,
    pub default_name: Name,
}

#[derive(Clone)]
pub struct ReceiptState {
    pub signer: Arc<ReceiptSigner>,
}

#[derive(Clone)]
pub struct PolicyServiceState {
    pub source: Arc<FilePolicySource>,
}
