// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the completion client

use std::env;

/// Configuration for the OpenAI-compatible completion client
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Bearer token; chat features are disabled without one
    pub api_key: Option<String>,
    /// Base URL without the `/v1/...` suffix
    pub base_url: String,
    /// Model used for selection, tutoring and topic extraction
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: env::var("LLM_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("LLM_MODEL").unwrap_or(defaults.model),
            timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("LLM model cannot be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("LLM base URL must be http(s): {}", self.base_url));
        }
        if self.timeout_secs == 0 {
            return Err("LLM timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4.1-mini".to_string(),
            timeout_secs: 60,
        }
    }
}
