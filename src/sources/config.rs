// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for source retrieval
//!
//! Defines the fetch timeout, identifying user agent and snippet cap.

use std::env;
use std::time::Duration;

/// Default user agent sent with every outbound fetch
pub const DEFAULT_USER_AGENT: &str = "edu-rag-bot/1.0";

/// Configuration for source retrieval
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    /// Timeout for a single page fetch in seconds (default: 10)
    pub fetch_timeout_secs: u64,
    /// User agent identifying automated access (default: edu-rag-bot/1.0)
    pub user_agent: String,
    /// Maximum characters kept from a page (default: 3000)
    pub max_snippet_chars: usize,
    /// Maximum redirects followed per fetch (default: 5)
    pub max_redirects: usize,
}

impl SourcesConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fetch_timeout_secs: env::var("SOURCE_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
            user_agent: env::var("SOURCE_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            max_snippet_chars: env::var("SOURCE_MAX_SNIPPET_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_snippet_chars),
            max_redirects: defaults.max_redirects,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be at least 1".to_string());
        }
        if self.max_snippet_chars == 0 {
            return Err("max_snippet_chars must be at least 1".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_snippet_chars: 3000,
            max_redirects: 5,
        }
    }
}
