// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Health and source registry routes

use super::support::{app_with, send, CannedFetcher};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_health_reports_chat_disabled() {
    let app = app_with(CannedFetcher::new(""), None);

    let (status, body) = send(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["chatEnabled"], false);
    assert_eq!(body["version"], study_assistant::version::VERSION);
}

#[tokio::test]
async fn test_registry_lists_domains_in_order() {
    let app = app_with(CannedFetcher::new(""), None);

    let (status, body) = send(app, Method::GET, "/v1/sources/registry", None).await;

    assert_eq!(status, StatusCode::OK);
    let domains = body["domains"].as_array().unwrap();
    assert_eq!(domains.len(), 10);
    assert_eq!(domains[0], "britannica.com");
    assert!(domains.iter().any(|d| d == "arxiv.org"));
}

#[tokio::test]
async fn test_validate_normalizes_domain() {
    let app = app_with(CannedFetcher::new(""), None);

    let (status, body) = send(
        app,
        Method::POST,
        "/v1/sources/validate",
        Some(json!({"domain": "  NASA.gov "})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domain"], "nasa.gov");
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn test_validate_unregistered_domain() {
    let app = app_with(CannedFetcher::new(""), None);

    let (status, body) = send(
        app,
        Method::POST,
        "/v1/sources/validate",
        Some(json!({"domain": "example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], false);
}

#[tokio::test]
async fn test_validate_rejects_dotless_domain() {
    let app = app_with(CannedFetcher::new(""), None);

    let (status, body) = send(
        app,
        Method::POST,
        "/v1/sources/validate",
        Some(json!({"domain": "localhost"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "domain");
}
