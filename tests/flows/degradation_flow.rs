/// Collaborator failures and how each degrades.

#[path = "../common/mod.rs"]
mod common;

use common::StackBuilder;
use serde_json::json;
use tolldns_domain::{Answer, Name};

#[tokio::test]
async fn test_unreachable_policy_degrades_to_unknown() {
    let stack = StackBuilder::new().policy_unreachable().start().await;

    let (status, body) = stack.resolve("example.com").await;

    assert_eq!(status, 200);
    assert_eq!(body["policy"]["state"], json!("UNKNOWN"));
    assert_eq!(body["source"], json!("upstream-quorum"));
}

#[tokio::test]
async fn test_missing_policy_file_degrades_to_unknown() {
    let stack = StackBuilder::new().policy_file(None).start().await;

    let (status, body) = stack.resolve("example.com").await;

    assert_eq!(status, 200);
    assert_eq!(body["policy"]["state"], json!("UNKNOWN"));
}

#[tokio::test]
async fn test_invalid_policy_file_degrades_to_unknown() {
    let stack = StackBuilder::new()
        .policy_file(Some("{not json"))
        .start()
        .await;

    let (_, body) = stack.resolve("example.com").await;

    assert_eq!(body["policy"]["state"], json!("UNKNOWN"));
}

#[tokio::test]
async fn test_no_answer_anywhere_is_bad_gateway_without_receipt() {
    let stack = StackBuilder::new().upstream_unreachable().start().await;

    let (status, body) = stack.resolve("example.com").await;

    assert_eq!(status, 502);
    assert!(body["error"].is_string());
    assert!(stack.receipts().is_empty());
}

#[tokio::test]
async fn test_cached_answer_survives_dead_upstream() {
    let stack = StackBuilder::new().upstream_unreachable().start().await;
    stack.cache.put(
        Name::parse("example.com").unwrap(),
        Answer::new("A", 60, "203.0.113.10"),
    );

    let (status, body) = stack.resolve("example.com").await;

    assert_eq!(status, 200);
    assert_eq!(body["source"], json!("cache"));
}

#[tokio::test]
async fn test_unreachable_receipt_service_still_answers() {
    let stack = StackBuilder::new().receipt_unreachable().start().await;

    let (status, body) = stack.resolve("example.com").await;

    assert_eq!(status, 200);
    assert_eq!(body["answer"]["data"], json!("203.0.113.10"));
    assert!(stack.receipts().is_empty());
}
