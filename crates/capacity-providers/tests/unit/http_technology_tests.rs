//! HTTP technology provider tests against a mock technology service

use capacity_domain::error::ErrorKind;
use capacity_domain::ports::TechnologyLookupProvider;
use capacity_domain::value_objects::{CorrelationId, TechnologySummary};
use capacity_providers::http::HttpClientConfig;
use capacity_providers::technology::HttpTechnologyProvider;
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;

fn provider(base_url: String) -> HttpTechnologyProvider {
    let client = HttpClientConfig::with_timeout(Duration::from_secs(5))
        .build_client()
        .expect("Should build client");
    HttpTechnologyProvider::new(base_url, client)
}

#[tokio::test]
async fn test_check_exist_posts_ids_with_correlation_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/technology/check-exists")
        .match_header("x-message-id", "msg-123")
        .match_body(Matcher::Json(json!({ "ids": [1, 2, 3] })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"1": true, "2": false, "3": true}"#)
        .create_async()
        .await;

    let existence = provider(server.url())
        .check_exist(&[1, 2, 3], &CorrelationId::new("msg-123"))
        .await
        .expect("Should check");

    mock.assert_async().await;
    assert_eq!(existence.len(), 3);
    assert_eq!(existence[&1], true);
    assert_eq!(existence[&2], false);
    assert_eq!(existence[&3], true);
}

#[tokio::test]
async fn test_fetch_by_ids_parses_summaries() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/technology/by-ids")
        .match_header("x-message-id", "msg-456")
        .match_body(Matcher::Json(json!({ "ids": [7, 8] })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 8, "name": "Go", "description": "ignored"}]"#)
        .create_async()
        .await;

    let technologies = provider(format!("{}/", server.url()))
        .fetch_by_ids(&[7, 8], &CorrelationId::new("msg-456"))
        .await
        .expect("Should fetch");

    mock.assert_async().await;
    assert_eq!(technologies, vec![TechnologySummary::new(8, "Go")]);
}

#[tokio::test]
async fn test_client_and_server_errors_are_upstream() {
    for status in [400, 404, 500, 503] {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/technology/by-ids")
            .with_status(status)
            .with_body("boom")
            .create_async()
            .await;

        let err = provider(server.url())
            .fetch_by_ids(&[1], &CorrelationId::new("x"))
            .await
            .expect_err("Non-success status should fail");
        assert_eq!(err.kind(), ErrorKind::Upstream, "status {status}");
        assert_eq!(err.public_message(), "Error communicating with technology service");
    }
}

#[tokio::test]
async fn test_undecodable_body_is_upstream() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/technology/check-exists")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = provider(server.url())
        .check_exist(&[1, 2, 3], &CorrelationId::new("x"))
        .await
        .expect_err("Bad body should fail");
    assert_eq!(err.kind(), ErrorKind::Upstream);
}

#[tokio::test]
async fn test_unreachable_service_is_upstream() {
    // Nothing listens on the discard port
    let err = provider("http://127.0.0.1:9".to_string())
        .check_exist(&[1, 2, 3], &CorrelationId::new("x"))
        .await
        .expect_err("Connection should fail");
    assert_eq!(err.kind(), ErrorKind::Upstream);
}

#[tokio::test]
async fn test_empty_ids_skip_the_network() {
    // No mock registered: any request would get a 501 from mockito
    let server = Server::new_async().await;
    let provider = provider(server.url());
    let correlation_id = CorrelationId::new("x");

    assert!(provider.check_exist(&[], &correlation_id).await.expect("Should succeed").is_empty());
    assert!(provider.fetch_by_ids(&[], &correlation_id).await.expect("Should succeed").is_empty());
}

#[test]
fn test_provider_name_and_base_url() {
    let provider = provider("http://technology:8081".to_string());
    assert_eq!(provider.provider_name(), "http");
    assert_eq!(provider.base_url(), "http://technology:8081");
}
