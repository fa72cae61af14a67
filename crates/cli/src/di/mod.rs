//! Wiring from configuration to running components.
//!
//! Engines are built in-process; the resolver swaps in an HTTP client for
//! each collaborator whose URL is configured.

use anyhow::Context;
use std::sync::Arc;
use tolldns_application::ports::{AnswerCache, PolicyGate, ReceiptSink, UpstreamResolver};
use tolldns_application::use_cases::ResolveNameUseCase;
use tolldns_domain::{Config, Name, PolicyState};
use tolldns_infrastructure::http::{
    HttpAnswerCache, HttpPolicyGate, HttpReceiptSink, HttpUpstreamResolver,
};
use tolldns_infrastructure::{
    FilePolicySource, FileReceiptLedger, MemoryReceiptLedger, QuorumUpstream, ReceiptLedger,
    ReceiptSigner, ResolutionCache, StaticPolicyGate,
};
use tracing::{info, warn};

pub struct Components {
    pub cache: Arc<ResolutionCache>,
    pub upstream: Arc<QuorumUpstream>,
    /// Only built when a started service signs receipts in-process.
    pub signer: Option<Arc<ReceiptSigner>>,
    pub policy_source: Arc<FilePolicySource>,
    pub default_name: Name,
}

impl Components {
    pub fn from_config(config: &Config, services: &[&str]) -> anyhow::Result<Self> {
        let signer = if needs_signer(config, services) {
            Some(Arc::new(build_signer(config)?))
        } else {
            None
        };

        Ok(Self {
            cache: Arc::new(ResolutionCache::new()),
            upstream: Arc::new(QuorumUpstream::from_config(&config.upstream)),
            signer,
            policy_source: Arc::new(FilePolicySource::new(&config.policy.config_path)),
            default_name: Name::parse(&config.resolver.default_name)?,
        })
    }

    pub fn signer(&self) -> anyhow::Result<Arc<ReceiptSigner>> {
        self.signer
            .clone()
            .context("receipt signer was not built for this service set")
    }

    /// Builds the pipeline, preferring remote collaborators where configured.
    pub fn resolver(&self, config: &Config) -> anyhow::Result<ResolveNameUseCase> {
        let timeout = config.resolver.timeout();
        let urls = &config.resolver;

        let policy: Arc<dyn PolicyGate> = match &urls.policy_url {
            Some(url) => {
                info!(url = %url, "Policy gate: remote");
                Arc::new(HttpPolicyGate::new(url, timeout))
            }
            None if config.policy.config_path.is_empty() => {
                warn!("No policy file or policy URL, every decision will be UNKNOWN");
                Arc::new(StaticPolicyGate::new(PolicyState::Unknown))
            }
            None => {
                info!(path = %config.policy.config_path, "Policy gate: file");
                self.policy_source.clone()
            }
        };

        let cache: Arc<dyn AnswerCache> = match &urls.cache_url {
            Some(url) => {
                info!(url = %url, "Cache: remote");
                Arc::new(HttpAnswerCache::new(url, timeout))
            }
            None => self.cache.clone(),
        };

        let upstream: Arc<dyn UpstreamResolver> = match &urls.upstream_url {
            Some(url) => {
                info!(url = %url, "Upstream quorum: remote");
                Arc::new(HttpUpstreamResolver::new(url, timeout))
            }
            None => self.upstream.clone(),
        };

        let receipts: Arc<dyn ReceiptSink> = match &urls.receipt_url {
            Some(url) => {
                info!(url = %url, "Receipt signer: remote");
                Arc::new(HttpReceiptSink::new(url, timeout))
            }
            None => self.signer()?,
        };

        Ok(ResolveNameUseCase::new(policy, cache, upstream, receipts).with_timeout(timeout))
    }
}

/// The receipt service always signs; the front doors sign in-process unless
/// a remote receipt service is configured.
fn needs_signer(config: &Config, services: &[&str]) -> bool {
    services.iter().any(|s| match *s {
        "receipt" => true,
        "doh" | "dot" => config.resolver.receipt_url.is_none(),
        _ => false,
    })
}

fn build_signer(config: &Config) -> anyhow::Result<ReceiptSigner> {
    let ledger: Arc<dyn ReceiptLedger> = if config.receipt.directory.is_empty() {
        warn!("No receipt directory configured, receipts are kept in memory only");
        Arc::new(MemoryReceiptLedger::new())
    } else {
        let ledger = FileReceiptLedger::new(&config.receipt.directory);
        info!(directory = %ledger.directory().display(), "Receipts written to disk");
        Arc::new(ledger)
    };
    Ok(ReceiptSigner::from_config(&config.receipt, ledger)?)
}
