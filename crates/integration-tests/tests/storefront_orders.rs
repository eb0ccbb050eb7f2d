//! Integration tests for order recording and history.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The storefront server running (cargo run -p quickbite-storefront)
//!
//! Run with: cargo test -p quickbite-integration-tests -- --include-ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the storefront API (configurable via environment).
fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Client with a cookie store, so session cookies survive across requests.
fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Test helper: Register a fresh account and return its JSON record.
async fn create_test_account(client: &Client) -> Value {
    let base_url = storefront_base_url();
    let resp = client
        .post(format!("{base_url}/accounts"))
        .json(&json!({
            "name": "Order Tester",
            "email": format!("it-{}@example.com", Uuid::new_v4()),
            "password": "amber-cashew-55",
        }))
        .send()
        .await
        .expect("Failed to create test account");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse account")
}

/// Test helper: Record an order for an account.
async fn record_order(client: &Client, account_id: &Value, transaction_id: &str) -> Value {
    let base_url = storefront_base_url();
    let resp = client
        .post(format!("{base_url}/orders"))
        .json(&json!({
            "accountId": account_id,
            "item": {
                "id": "jollof-rice",
                "name": "Jollof Rice",
                "price": 1500,
                "image": "https://cdn.quickbite.example/jollof-rice.jpg",
            },
            "transactionId": transaction_id,
        }))
        .send()
        .await
        .expect("Failed to record order");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse order")
}

/// Test helper: Fetch an account's order history.
async fn order_history(client: &Client, account_id: &Value) -> Vec<Value> {
    let base_url = storefront_base_url();
    let resp = client
        .get(format!("{base_url}/orders"))
        .query(&[("accountId", account_id.to_string())])
        .send()
        .await
        .expect("Failed to fetch order history");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse order history")
}

#[tokio::test]
#[ignore = "Requires a running storefront server and database"]
async fn test_history_is_empty_for_new_account() {
    let client = client();
    let account = create_test_account(&client).await;

    let history = order_history(&client, &account["id"]).await;
    assert!(history.is_empty());
}

#[tokio::test]
#[ignore = "Requires a running storefront server and database"]
async fn test_history_lists_newest_first() {
    let client = client();
    let account = create_test_account(&client).await;
    let tx_first = format!("QB-IT-{}", Uuid::new_v4());
    let tx_second = format!("QB-IT-{}", Uuid::new_v4());

    let recorded = record_order(&client, &account["id"], &tx_first).await;
    assert_eq!(recorded["transactionId"], tx_first.as_str());
    assert_eq!(recorded["status"], "completed");

    record_order(&client, &account["id"], &tx_second).await;

    let history = order_history(&client, &account["id"]).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["transactionId"], tx_second.as_str());
    assert_eq!(history[1]["transactionId"], tx_first.as_str());
}

#[tokio::test]
#[ignore = "Requires a running storefront server and database"]
async fn test_missing_transaction_id_is_rejected_without_a_write() {
    let client = client();
    let account = create_test_account(&client).await;

    let base_url = storefront_base_url();
    let resp = client
        .post(format!("{base_url}/orders"))
        .json(&json!({
            "accountId": account["id"],
            "item": {
                "id": "beef-burger",
                "name": "Beef Burger",
                "price": 2000,
                "image": "https://cdn.quickbite.example/beef-burger.jpg",
            },
        }))
        .send()
        .await
        .expect("Failed to post incomplete order");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored.
    let history = order_history(&client, &account["id"]).await;
    assert!(history.is_empty());
}
