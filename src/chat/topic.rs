// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Topic extraction for uploaded documents

use std::sync::Arc;
use tracing::info;

use super::prompts::TEXT_SLOT;
use crate::llm::{CompletionOracle, LlmError, PromptMessage};

const TOPIC_PERSONA: &str = "You are a topic extraction assistant.";

/// Substitute the document text into the topic template
pub fn format_topic_prompt(template: &str, text: &str) -> String {
    template.replace(TEXT_SLOT, text)
}

/// Strip an optional `Topic:` label from the model's reply
pub fn parse_topic(output: &str) -> String {
    output.trim().replace("Topic:", "").trim().to_string()
}

/// Derives a short topic label for a document
pub struct TopicExtractor {
    oracle: Arc<dyn CompletionOracle>,
    template: String,
}

impl TopicExtractor {
    pub fn new(oracle: Arc<dyn CompletionOracle>, template: impl Into<String>) -> Self {
        Self {
            oracle,
            template: template.into(),
        }
    }

    pub async fn extract(&self, text: &str) -> Result<String, LlmError> {
        let messages = [
            PromptMessage::system(TOPIC_PERSONA),
            PromptMessage::user(format_topic_prompt(&self.template, text)),
        ];

        let output = self.oracle.complete(&messages).await?;
        let topic = parse_topic(&output);
        info!("Extracted topic: {}", topic);
        Ok(topic)
    }
}
