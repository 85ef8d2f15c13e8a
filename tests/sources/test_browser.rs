// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end browsing through a registry entry pointing at a local site

use super::support::spawn_site;
use std::{net::SocketAddr, sync::Arc};
use study_assistant::sources::{
    BrowseOutcome, DomainRegistry, EmptyReason, SourceBrowser, SourcesConfig,
};

/// Browser whose registry maps `127.0.0.1` to the given path on the local site
fn browser_for(addr: SocketAddr, path_template: &str, config: SourcesConfig) -> SourceBrowser {
    let template = format!("http://{}{}", addr, path_template);
    let registry = DomainRegistry::from_entries([("127.0.0.1", template.as_str())]).unwrap();
    SourceBrowser::with_http(Arc::new(registry), config).unwrap()
}

#[tokio::test]
async fn test_browse_local_site_returns_clean_snippet() {
    let addr = spawn_site().await;
    let browser = browser_for(addr, "/search?q={query}", SourcesConfig::default());

    let text = browser
        .browse_allowed_sources("plant cells", "127.0.0.1")
        .await;

    assert!(text.starts_with("[SOURCE: 127.0.0.1]\n"));
    assert!(text.contains("Results for plant cells"));
    assert!(!text.contains("trackVisitor"));
    assert!(!text.contains("Site Header"));
    assert!(!text.contains("Home | About"));
    assert!(!text.contains("Copyright"));
    assert!(!text.contains("color: red"));
}

#[tokio::test]
async fn test_browse_long_page_is_capped() {
    let addr = spawn_site().await;
    let browser = browser_for(addr, "/long?q={query}", SourcesConfig::default());

    let outcome = browser.browse("anything", "127.0.0.1").await;

    let snippet = outcome.snippet().expect("snippet");
    assert_eq!(snippet.content.chars().count(), 3000);
}

#[tokio::test]
async fn test_browse_not_found_is_empty() {
    let addr = spawn_site().await;
    let browser = browser_for(addr, "/missing?q={query}", SourcesConfig::default());

    let text = browser.browse_allowed_sources("x", "127.0.0.1").await;

    assert_eq!(text, "");
}

#[tokio::test]
async fn test_browse_page_without_text_is_empty() {
    let addr = spawn_site().await;
    let browser = browser_for(addr, "/empty?q={query}", SourcesConfig::default());

    let outcome = browser.browse("x", "127.0.0.1").await;

    assert_eq!(outcome.empty_reason(), Some(EmptyReason::NoContent));
}

#[tokio::test]
async fn test_browse_timeout_is_empty() {
    let addr = spawn_site().await;
    let config = SourcesConfig {
        fetch_timeout_secs: 1,
        ..SourcesConfig::default()
    };
    let browser = browser_for(addr, "/slow?q={query}", config);

    let outcome = browser.browse("x", "127.0.0.1").await;

    assert_eq!(outcome, BrowseOutcome::Empty(EmptyReason::FetchFailed));
}

#[tokio::test]
async fn test_browse_unregistered_domain_is_empty() {
    let addr = spawn_site().await;
    let browser = browser_for(addr, "/search?q={query}", SourcesConfig::default());

    let text = browser.browse_allowed_sources("x", "localhost.test").await;

    assert_eq!(text, "");
}
