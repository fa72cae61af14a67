/// Resolution flow over real sockets:
/// DoH -> policy service -> cache service -> upstream service -> receipt service

#[path = "../common/mod.rs"]
mod common;

use common::{Stack, StackBuilder};
use serde_json::json;
use tolldns_domain::{Answer, Name};

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_first_resolution_goes_to_upstream_quorum() {
    let stack = Stack::start().await;

    let (status, body) = stack.resolve("example.com").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "name": "example.com",
            "policy": {"state": "ALLOW"},
            "answer": {"type": "A", "ttl": 60, "data": "203.0.113.10"},
            "source": "upstream-quorum"
        })
    );
    assert_eq!(
        stack.cache.get(&Name::parse("example.com").unwrap()),
        Some(Answer::new("A", 60, "203.0.113.10"))
    );
}

#[tokio::test]
async fn test_receipt_is_written_and_verifiable() {
    let stack = Stack::start().await;

    let (_, body) = stack.resolve("example.com").await;

    let receipts = stack.receipts();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].payload.payload, body);
    assert!(stack.signer.verify(&receipts[0]));
}

#[tokio::test]
async fn test_second_resolution_is_served_from_cache() {
    let stack = Stack::start().await;

    stack.resolve("example.com").await;
    let (status, body) = stack.resolve("example.com").await;

    assert_eq!(status, 200);
    assert_eq!(body["source"], json!("cache"));
    assert_eq!(body["answer"]["data"], json!("203.0.113.10"));
    assert_eq!(stack.receipts().len(), 2);
}

#[tokio::test]
async fn test_policy_file_state_is_reported() {
    let stack = StackBuilder::new()
        .policy_file(Some(r#"{"state":"BLOCK","reason":"maintenance"}"#))
        .start()
        .await;

    let (status, body) = stack.resolve("example.com").await;

    assert_eq!(status, 200);
    assert_eq!(body["policy"], json!({"state": "BLOCK", "reason": "maintenance"}));
}

#[tokio::test]
async fn test_dns_query_alias_and_default_name() {
    let stack = Stack::start().await;

    let response = stack
        .client
        .get(stack.doh.url("/dns-query"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], json!("example.com"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let stack = Stack::start().await;

    let response = stack
        .client
        .get(stack.doh.url("/nope"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_every_service_reports_health() {
    let stack = Stack::start().await;

    for server in [
        &stack.doh,
        &stack.policy,
        &stack.cache_svc,
        &stack.upstream,
        &stack.receipt,
    ] {
        let response = stack.client.get(server.url("/health")).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "OK");
    }
}

// ============================================================================
// Upstream quorum service
// ============================================================================

#[tokio::test]
async fn test_upstream_service_reports_majority() {
    let stack = StackBuilder::new()
        .upstreams(&["a", "b", "c", "d"])
        .start()
        .await;

    let body: serde_json::Value = stack
        .client
        .get(stack.upstream.url("/query"))
        .query(&[("name", "test.org")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["name"], json!("test.org"));
    assert_eq!(body["quorum"], json!({"required": 3, "responded": 4}));
}
