// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /v1/browse

use super::support::{app_with, send, CannedFetcher};
use axum::http::{Method, StatusCode};
use serde_json::json;

const PAGE: &str = "<html><body><nav>Menu</nav><main><p>Photosynthesis converts light into chemical energy.</p></main></body></html>";

#[tokio::test]
async fn test_browse_registered_domain() {
    let fetcher = CannedFetcher::new(PAGE);
    let app = app_with(fetcher.clone(), None);

    let (status, body) = send(
        app,
        Method::POST,
        "/v1/browse",
        Some(json!({"query": "photosynthesis", "forcedDomain": "wikipedia.org"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["text"],
        "[SOURCE: wikipedia.org]\nPhotosynthesis converts light into chemical energy."
    );

    let urls = fetcher.urls.lock().unwrap();
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with("https://en.wikipedia.org/w/index.php?search=photosynthesis"));
}

#[tokio::test]
async fn test_browse_unknown_domain_returns_empty_text() {
    let fetcher = CannedFetcher::new(PAGE);
    let app = app_with(fetcher.clone(), None);

    let (status, body) = send(
        app,
        Method::POST,
        "/v1/browse",
        Some(json!({"query": "photosynthesis", "forcedDomain": "example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "");
    assert!(fetcher.urls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_browse_empty_query_rejected() {
    let app = app_with(CannedFetcher::new(PAGE), None);

    let (status, body) = send(
        app,
        Method::POST,
        "/v1/browse",
        Some(json!({"query": "  ", "forcedDomain": "nasa.gov"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(body["details"]["field"], "query");
}

#[tokio::test]
async fn test_browse_rejects_get() {
    let app = app_with(CannedFetcher::new(PAGE), None);

    let (status, _) = send(app, Method::GET, "/v1/browse", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
