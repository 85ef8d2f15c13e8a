// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text-completion oracle trait

use async_trait::async_trait;

use super::types::{LlmError, PromptMessage};

/// Opaque text-completion backend
///
/// Takes an ordered list of messages and returns the completion text.
/// Implemented by [`OpenAiCompatibleClient`](super::OpenAiCompatibleClient)
/// in production and by canned fakes in tests.
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, LlmError>;

    /// Model identifier for logging
    fn model_name(&self) -> &str;
}
