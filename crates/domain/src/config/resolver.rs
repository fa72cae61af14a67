use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolver pipeline settings.
///
/// A collaborator URL left unset means the resolver wires the in-process
/// component instead of calling a remote service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// e.g. "http://policy-client:7080/policy"
    pub policy_url: Option<String>,

    /// e.g. "http://upstream-quorum:7081/query"
    pub upstream_url: Option<String>,

    /// e.g. "http://cache:7082/cache"
    pub cache_url: Option<String>,

    /// e.g. "http://receipt-stub:7083/receipt"
    pub receipt_url: Option<String>,

    /// Bound on every collaborator call, in milliseconds
    pub timeout_ms: u64,

    /// Name resolved when a DoH request omits `name`
    pub default_name: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            policy_url: None,
            upstream_url: None,
            cache_url: None,
            receipt_url: None,
            timeout_ms: 2000,
            default_name: "example.com".to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
