//! Integration tests for the single-target chat endpoint.

mod common;

use chat_service::services::providers::mock::{MockBehavior, MockChatProvider};
use common::TestApp;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn chat_echoes_through_the_primary_deployment() {
    let provider = Arc::new(MockChatProvider::new());
    let app = TestApp::spawn(provider.clone()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/chat", app.address))
        .json(&json!({ "message": "hello", "model": "gpt" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["model"], common::PRIMARY_DEPLOYMENT);
    assert_eq!(body["response"], "hello");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn chat_resolves_the_secondary_target() {
    let provider = Arc::new(MockChatProvider::new().script(
        common::SECONDARY_DEPLOYMENT,
        MockBehavior::Reply("from the secondary".to_string()),
        Duration::ZERO,
    ));
    let app = TestApp::spawn(provider.clone()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/chat", app.address))
        .json(&json!({ "message": "hello", "model": "secondary" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["model"], common::SECONDARY_DEPLOYMENT);
    assert_eq!(body["response"], "from the secondary");
}

#[tokio::test]
async fn chat_defaults_to_the_primary_target() {
    let provider = Arc::new(MockChatProvider::new());
    let app = TestApp::spawn(provider.clone()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/chat", app.address))
        .json(&json!({ "message": "hi" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["model"], common::PRIMARY_DEPLOYMENT);
}

#[tokio::test]
async fn chat_rejects_empty_message_without_calling_provider() {
    let provider = Arc::new(MockChatProvider::new());
    let app = TestApp::spawn(provider.clone()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/chat", app.address))
        .json(&json!({ "message": "", "model": "gpt" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_client_error());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn chat_rejects_whitespace_only_message_without_calling_provider() {
    let provider = Arc::new(MockChatProvider::new());
    let app = TestApp::spawn(provider.clone()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/chat", app.address))
        .json(&json!({ "message": "   \n\t " }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn chat_surfaces_provider_failure_as_generic_bad_gateway() {
    let provider = Arc::new(MockChatProvider::new().script(
        common::PRIMARY_DEPLOYMENT,
        MockBehavior::Fail("quota exhausted for subscription 12345".to_string()),
        Duration::ZERO,
    ));
    let app = TestApp::spawn(provider.clone()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/chat", app.address))
        .json(&json!({ "message": "hello", "model": "gpt" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);

    // The upstream detail stays in the logs, never in the response body.
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Failed to get response from model");
    assert!(!body.to_string().contains("quota exhausted"));
}
