// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! OpenAiCompatibleClient against a mock chat-completions server

use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use study_assistant::llm::{
    CompletionOracle, LlmConfig, LlmError, OpenAiCompatibleClient, PromptMessage,
};

/// Echoes the last message back after checking auth
async fn completions(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer sk-test");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"})));
    }

    let last = body["messages"]
        .as_array()
        .and_then(|m| m.last())
        .and_then(|m| m["content"].as_str())
        .unwrap_or_default()
        .to_string();

    if last == "nothing" {
        return (StatusCode::OK, Json(json!({"choices": []})));
    }

    (
        StatusCode::OK,
        Json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": format!("  {} from {}  ", last, body["model"].as_str().unwrap_or(""))
                }
            }]
        })),
    )
}

async fn spawn_mock() -> SocketAddr {
    let app = Router::new().route("/v1/chat/completions", post(completions));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}

fn client(addr: SocketAddr, key: &str) -> OpenAiCompatibleClient {
    OpenAiCompatibleClient::new(&LlmConfig {
        api_key: Some(key.to_string()),
        base_url: format!("http://{}/", addr),
        model: "tutor-small".to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_completion_round_trip() {
    let addr = spawn_mock().await;
    let client = client(addr, "sk-test");

    let reply = client
        .complete(&[
            PromptMessage::system("be brief"),
            PromptMessage::user("hello"),
        ])
        .await
        .unwrap();

    assert_eq!(reply, "hello from tutor-small");
}

#[tokio::test]
async fn test_rejected_key_maps_to_api_error() {
    let addr = spawn_mock().await;
    let client = client(addr, "sk-wrong");

    let result = client.complete(&[PromptMessage::user("hello")]).await;

    match result {
        Err(LlmError::Api { status, .. }) => assert_eq!(status, 401),
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_choices_is_empty_response() {
    let addr = spawn_mock().await;
    let client = client(addr, "sk-test");

    let result = client.complete(&[PromptMessage::user("nothing")]).await;

    assert!(matches!(result, Err(LlmError::EmptyResponse)));
}
