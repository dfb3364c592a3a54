//! Backend client requests and error mapping.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{api_config, client_for, dead_base_url};
use sbwallet::api::{ApiClient, ApiError, ErrorInfo, ErrorKind, TransactionRequest};
use sbwallet::config::ApiConfig;

#[tokio::test]
async fn test_balance_and_address_decode() {
    let mock = MockBackend::start().await;
    mock.enqueue_for("/balance", MockResponse::json(r#"{"balance": 1250}"#))
        .await;
    mock.enqueue_for(
        "/address/me",
        MockResponse::json(r#"{"address": "3a5f0c9e"}"#),
    )
    .await;

    let client = client_for(&mock.base_url());
    assert_eq!(client.balance().await.unwrap().balance, 1250);
    assert_eq!(client.address().await.unwrap().address, "3a5f0c9e");
}

#[tokio::test]
async fn test_send_coins_posts_transaction_body() {
    let mock = MockBackend::start().await;
    mock.enqueue_for("/transaction", MockResponse::json("{}")).await;

    let client = client_for(&mock.base_url());
    let request = TransactionRequest {
        recipient: "abc".to_string(),
        value: 10,
        fee: 1,
    };
    client.send_coins(&request).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/transaction");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"recipient": "abc", "value": 10, "fee": 1})
    );
}

#[tokio::test]
async fn test_send_coins_rejection_keeps_backend_message() {
    let mock = MockBackend::start().await;
    mock.enqueue_for(
        "/transaction",
        MockResponse::error(400, "Failed to process request."),
    )
    .await;

    let client = client_for(&mock.base_url());
    let request = TransactionRequest {
        recipient: "abc".to_string(),
        value: 10_000,
        fee: 0,
    };
    let err = client.send_coins(&request).await.unwrap_err();

    assert!(matches!(
        &err,
        ApiError::Status { status: 400, message, .. } if message == "Failed to process request."
    ));
    assert_eq!(err.status(), Some(400));

    let info = ErrorInfo::from(&err);
    assert_eq!(info.kind, ErrorKind::Status);
    assert_eq!(info.status, Some(400));
}

#[tokio::test]
async fn test_update_blockchain_uses_its_own_url() {
    let node = MockBackend::start().await;
    let sync = MockBackend::start().await;

    let config = ApiConfig {
        update_blockchain_url: format!("{}/update-balance", sync.base_url()),
        ..api_config(&node.base_url())
    };
    let client = ApiClient::new(&config).unwrap();
    client.update_blockchain().await.unwrap();

    assert!(node.captured_requests().await.is_empty());
    let requests = sync.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/update-balance");
}

#[tokio::test]
async fn test_generate_block_posts_to_node() {
    let mock = MockBackend::start().await;
    let client = client_for(&mock.base_url());
    client.generate_block().await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/generate-block");
}

#[tokio::test]
async fn test_connection_refused_is_connection_error() {
    let client = client_for(&dead_base_url());
    let err = client.balance().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connection);
    assert_eq!(err.error_type(), "connection_error");
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_ignored() {
    let mock = MockBackend::start().await;
    mock.enqueue_for("/balance", MockResponse::json(r#"{"balance": 3}"#))
        .await;

    let client = client_for(&format!("{}/", mock.base_url()));
    assert_eq!(client.base_url(), mock.base_url());
    assert_eq!(client.balance().await.unwrap().balance, 3);
}
