// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Completion client for OpenAI-compatible chat APIs

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::config::LlmConfig;
use super::oracle::CompletionOracle;
use super::types::{LlmError, PromptMessage};

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for `POST {base_url}/v1/chat/completions`
pub struct OpenAiCompatibleClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model_name: String,
}

impl OpenAiCompatibleClient {
    /// Create a client from configuration
    ///
    /// Fails with [`LlmError::MissingApiKey`] when no key is configured.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config.api_key.clone().ok_or(LlmError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let endpoint = config.base_url.trim_end_matches('/').to_string();
        info!(
            "LLM client configured: endpoint={}, model={}",
            endpoint, config.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key,
            model_name: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionOracle for OpenAiCompatibleClient {
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, LlmError> {
        let start = Instant::now();
        let request = ChatRequest {
            model: &self.model_name,
            messages,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        debug!(
            "Completion from {} in {}ms ({} chars)",
            self.model_name,
            start.elapsed().as_millis(),
            text.len()
        );

        Ok(text.trim().to_string())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
