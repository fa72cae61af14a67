use super::test_server::{closed_url, TestServer};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tolldns_api::{
    create_cache_routes, create_policy_routes, create_receipt_routes, create_resolver_routes,
    create_upstream_routes, CacheState, PolicyServiceState, ReceiptState, ResolverState,
    UpstreamState,
};
use tolldns_application::ports::PolicyGate;
use tolldns_application::use_cases::ResolveNameUseCase;
use tolldns_domain::{Answer, Name, SignedReceipt};
use tolldns_infrastructure::http::{
    HttpAnswerCache, HttpPolicyGate, HttpReceiptSink, HttpUpstreamResolver,
};
use tolldns_infrastructure::{
    DotServer, FilePolicySource, FileReceiptLedger, QuorumUpstream, ReceiptSigner,
    ResolutionCache, SigningSecret,
};

pub const SECRET: &[u8] = b"local-dev-secret";
const TIMEOUT: Duration = Duration::from_millis(500);

pub struct StackBuilder {
    policy_json: Option<String>,
    upstreams: Vec<String>,
    policy_down: bool,
    upstream_down: bool,
    receipt_down: bool,
}

impl StackBuilder {
    pub fn new() -> Self {
        Self {
            policy_json: Some(r#"{"state":"ALLOW"}"#.into()),
            upstreams: vec!["cloudflare".into(), "google".into(), "quad9".into()],
            policy_down: false,
            upstream_down: false,
            receipt_down: false,
        }
    }

    /// `None` leaves the policy file absent.
    pub fn policy_file(mut self, json: Option<&str>) -> Self {
        self.policy_json = json.map(str::to_owned);
        self
    }

    pub fn upstreams(mut self, ids: &[&str]) -> Self {
        self.upstreams = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn policy_unreachable(mut self) -> Self {
        self.policy_down = true;
        self
    }

    pub fn upstream_unreachable(mut self) -> Self {
        self.upstream_down = true;
        self
    }

    pub fn receipt_unreachable(mut self) -> Self {
        self.receipt_down = true;
        self
    }

    /// Starts every service on its own port; the resolver reaches each
    /// collaborator over HTTP.
    pub async fn start(self) -> Stack {
        let dir = tempfile::tempdir().unwrap();
        let policy_path = dir.path().join("policy.json");
        if let Some(json) = &self.policy_json {
            std::fs::write(&policy_path, json).unwrap();
        }
        let receipts_dir = dir.path().join("receipts");

        let cache = Arc::new(ResolutionCache::new());
        let signer = Arc::new(ReceiptSigner::new(
            SigningSecret::Configured(SECRET.to_vec()),
            Arc::new(FileReceiptLedger::new(&receipts_dir)),
        ));
        let upstream = Arc::new(QuorumUpstream::new(
            self.upstreams,
            Answer::new("A", 60, "203.0.113.10"),
            None,
        ));
        let default_name = Name::parse("example.com").unwrap();

        let policy_svc = TestServer::http(create_policy_routes(PolicyServiceState {
            source: Arc::new(FilePolicySource::new(&policy_path)),
        }))
        .await;
        let cache_svc = TestServer::http(create_cache_routes(CacheState {
            cache: cache.clone(),
        }))
        .await;
        let upstream_svc = TestServer::http(create_upstream_routes(UpstreamState {
            upstream,
            default_name: default_name.clone(),
        }))
        .await;
        let receipt_svc = TestServer::http(create_receipt_routes(ReceiptState {
            signer: signer.clone(),
        }))
        .await;

        let policy_url = if self.policy_down {
            closed_url("/policy").await
        } else {
            policy_svc.url("/policy")
        };
        let upstream_url = if self.upstream_down {
            closed_url("/query").await
        } else {
            upstream_svc.url("/query")
        };
        let receipt_url = if self.receipt_down {
            closed_url("/receipt").await
        } else {
            receipt_svc.url("/receipt")
        };

        let policy: Arc<dyn PolicyGate> = Arc::new(HttpPolicyGate::new(policy_url, TIMEOUT));
        let resolve = Arc::new(
            ResolveNameUseCase::new(
                policy,
                Arc::new(HttpAnswerCache::new(cache_svc.url("/cache"), TIMEOUT)),
                Arc::new(HttpUpstreamResolver::new(upstream_url, TIMEOUT)),
                Arc::new(HttpReceiptSink::new(receipt_url, TIMEOUT)),
            )
            .with_timeout(TIMEOUT),
        );

        let doh = TestServer::http(create_resolver_routes(ResolverState {
            resolve: resolve.clone(),
            default_name,
        }))
        .await;
        let dot = TestServer::dot(DotServer::new().with_resolver(resolve)).await;

        Stack {
            doh,
            dot,
            policy: policy_svc,
            cache_svc,
            upstream: upstream_svc,
            receipt: receipt_svc,
            cache,
            signer,
            receipts_dir,
            _dir: dir,
            client: reqwest::Client::new(),
        }
    }
}

pub struct Stack {
    pub doh: TestServer,
    pub dot: TestServer,
    pub policy: TestServer,
    pub cache_svc: TestServer,
    pub upstream: TestServer,
    pub receipt: TestServer,
    pub cache: Arc<ResolutionCache>,
    pub signer: Arc<ReceiptSigner>,
    pub receipts_dir: std::path::PathBuf,
    _dir: TempDir,
    pub client: reqwest::Client,
}

impl Stack {
    pub async fn start() -> Self {
        StackBuilder::new().start().await
    }

    /// `GET /resolve?name=` on the DoH front door.
    pub async fn resolve(&self, name: &str) -> (u16, serde_json::Value) {
        let response = self
            .client
            .get(self.doh.url("/resolve"))
            .query(&[("name", name)])
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    /// Every receipt written so far.
    pub fn receipts(&self) -> Vec<SignedReceipt> {
        let Ok(entries) = std::fs::read_dir(&self.receipts_dir) else {
            return Vec::new();
        };
        entries
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .map(|p| serde_json::from_slice(&std::fs::read(p).unwrap()).unwrap())
            .collect()
    }
}
