//! Integration tests for account registration and login.
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

/// A throwaway email that cannot collide with earlier runs.
fn unique_email() -> String {
    format!("it-{}@example.com", Uuid::new_v4())
}

#[tokio::test]
#[ignore = "Requires a running storefront server and database"]
async fn test_duplicate_registration_keeps_a_single_account() {
    let client = client();
    let base_url = storefront_base_url();
    let email = unique_email();

    let resp = client
        .post(format!("{base_url}/accounts"))
        .json(&json!({
            "name": "First Caller",
            "email": email,
            "password": "orange-garlic-42",
        }))
        .send()
        .await
        .expect("Failed to create account");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Value = resp.json().await.expect("Failed to parse account");

    // A second registration with the same email loses.
    let resp = client
        .post(format!("{base_url}/accounts"))
        .json(&json!({
            "name": "Second Caller",
            "email": email,
            "password": "plum-ginger-77",
        }))
        .send()
        .await
        .expect("Failed to create duplicate account");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // The surviving record is the first one: its password signs in and
    // resolves to the first account ID.
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({"email": email, "password": "orange-garlic-42"}))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK);
    let signed_in: Value = resp.json().await.expect("Failed to parse login response");
    assert_eq!(signed_in["id"], first["id"]);
    assert_eq!(signed_in["name"], "First Caller");

    // The losing registration's password never took.
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({"email": email, "password": "plum-ginger-77"}))
        .send()
        .await
        .expect("Failed to log in with losing password");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires a running storefront server and database"]
async fn test_session_restore_after_register() {
    let client = client();
    let base_url = storefront_base_url();
    let email = unique_email();

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&json!({
            "name": "Session Holder",
            "email": email,
            "password": "teal-walnut-19",
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Registration signs the caller in; the session cookie restores them.
    let resp = client
        .get(format!("{base_url}/auth/me"))
        .send()
        .await
        .expect("Failed to restore session");
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Value = resp.json().await.expect("Failed to parse session response");
    assert_eq!(me["email"], email);
}
