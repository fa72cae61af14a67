#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tolldns_api::{
    create_cache_routes, create_policy_routes, create_receipt_routes, create_resolver_routes,
    create_upstream_routes, CacheState, PolicyServiceState, ReceiptState, ResolverState,
    UpstreamState,
};
use tolldns_application::ports::UpstreamResolver;
use tolldns_application::use_cases::ResolveNameUseCase;
use tolldns_domain::{Answer, DomainError, Name, PolicyState, UpstreamAnswer};
use tolldns_infrastructure::{
    FilePolicySource, MemoryReceiptLedger, QuorumUpstream, ReceiptSigner, ResolutionCache,
    SigningSecret, StaticPolicyGate,
};
use tower::ServiceExt;

pub const SECRET: &[u8] = b"test-secret";

pub fn default_name() -> Name {
    Name::parse("example.com").unwrap()
}

pub fn quorum() -> Arc<QuorumUpstream> {
    Arc::new(QuorumUpstream::new(
        vec!["cloudflare".into(), "google".into(), "quad9".into()],
        Answer::new("A", 60, "203.0.113.10"),
        None,
    ))
}

pub fn signer(ledger: Arc<MemoryReceiptLedger>) -> Arc<ReceiptSigner> {
    Arc::new(ReceiptSigner::new(
        SigningSecret::Configured(SECRET.to_vec()),
        ledger,
    ))
}

/// Upstream that never has an answer.
pub struct DeadUpstream;

#[async_trait]
impl UpstreamResolver for DeadUpstream {
    async fn query(&self, _name: &Name) -> Result<UpstreamAnswer, DomainError> {
        Err(DomainError::unavailable("upstream quorum", "connection refused"))
    }
}

/// Resolver front door wired to in-process components.
pub struct ResolverApp {
    pub router: Router,
    pub cache: Arc<ResolutionCache>,
    pub ledger: Arc<MemoryReceiptLedger>,
}

impl ResolverApp {
    pub fn new() -> Self {
        Self::with_upstream(quorum())
    }

    pub fn with_upstream(upstream: Arc<dyn UpstreamResolver>) -> Self {
        let cache = Arc::new(ResolutionCache::new());
        let ledger = Arc::new(MemoryReceiptLedger::new());
        let resolve = ResolveNameUseCase::new(
            Arc::new(StaticPolicyGate::new(PolicyState::Allow)),
            cache.clone(),
            upstream,
            signer(ledger.clone()),
        )
        .with_timeout(Duration::from_millis(500));

        let router = create_resolver_routes(ResolverState {
            resolve: Arc::new(resolve),
            default_name: default_name(),
        });
        Self {
            router,
            cache,
            ledger,
        }
    }
}

pub fn cache_router() -> (Router, Arc<ResolutionCache>) {
    let cache = Arc::new(ResolutionCache::new());
    (
        create_cache_routes(CacheState {
            cache: cache.clone(),
        }),
        cache,
    )
}

pub fn upstream_router() -> Router {
    create_upstream_routes(UpstreamState {
        upstream: quorum(),
        default_name: default_name(),
    })
}

pub fn receipt_router(signer: Arc<ReceiptSigner>) -> Router {
    create_receipt_routes(ReceiptState { signer })
}

pub fn policy_router(path: &std::path::Path) -> Router {
    create_policy_routes(PolicyServiceState {
        source: Arc::new(FilePolicySource::new(path)),
    })
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(router, request).await
}

/// Sends one request; a non-JSON body comes back as a JSON string.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}
