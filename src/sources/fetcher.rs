// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Single-shot HTTP page fetching
//!
//! One GET per call with a fixed timeout and user agent. No retries.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::config::SourcesConfig;

/// Page fetch error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),
    /// Connection, DNS or protocol failure
    #[error("HTTP error: {0}")]
    Http(String),
    /// HTTP non-success status
    #[error("HTTP {0} for: {1}")]
    Status(u16, String),
    /// Body could not be read as text
    #[error("Failed reading body of {0}: {1}")]
    Body(String, String),
}

/// Retrieves raw markup for a URL
///
/// Implementations make exactly one attempt; callers treat any error as
/// "no content from this source".
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`PageFetcher`] backed by reqwest
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Create a fetcher using the configured timeout and user agent
    pub fn new(config: &SourcesConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching source page: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16(), url.to_string()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Body(url.to_string(), e.to_string())
            }
        })
    }
}
