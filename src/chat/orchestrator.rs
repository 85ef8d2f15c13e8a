// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat turn orchestration
//!
//! One turn: narrow the user's sources to the registry, let the model pick
//! at most one domain, browse it once, assemble the tutoring prompt and ask
//! for the answer. External latency per turn is bounded by one fetch.

use std::sync::Arc;
use tracing::{debug, info};

use super::context::{build_tutor_messages, ContextInputs, HistoryMessage};
use super::prompts::PromptSet;
use super::selector::DomainSelector;
use crate::llm::{CompletionOracle, LlmError};
use crate::sources::{filter_allowed, SourceBrowser};

/// Caller-supplied state for one chat turn
///
/// Documents, history and the user's source list come from external storage.
#[derive(Debug, Clone, Default)]
pub struct ChatTurn {
    pub message: String,
    pub allowed_domains: Vec<String>,
    pub document: Option<String>,
    pub history: Vec<HistoryMessage>,
}

/// Result of a chat turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurnOutcome {
    pub reply: String,
    pub chosen_domain: Option<String>,
    pub query: Option<String>,
    /// Rendered snippet, empty when nothing was browsed or browsing failed
    pub web_context: String,
}

pub struct ChatOrchestrator {
    browser: Arc<SourceBrowser>,
    oracle: Arc<dyn CompletionOracle>,
    selector: DomainSelector,
    prompts: Arc<PromptSet>,
}

impl ChatOrchestrator {
    pub fn new(
        browser: Arc<SourceBrowser>,
        oracle: Arc<dyn CompletionOracle>,
        prompts: Arc<PromptSet>,
    ) -> Self {
        Self {
            selector: DomainSelector::new(oracle.clone()),
            browser,
            oracle,
            prompts,
        }
    }

    /// Run one turn
    ///
    /// Selection and browsing problems only mean "no web context"; the
    /// error returned here is from the final answer completion.
    pub async fn run_turn(&self, turn: &ChatTurn) -> Result<ChatTurnOutcome, LlmError> {
        let allowed = filter_allowed(self.browser.registry(), &turn.allowed_domains);
        debug!(
            "{} of {} user domains are browsable",
            allowed.len(),
            turn.allowed_domains.len()
        );

        let decision = self.selector.select(&allowed, &turn.message).await;

        let web_context = match &decision {
            Some(d) => {
                self.browser
                    .browse_allowed_sources(&d.query, d.domain.as_str())
                    .await
            }
            None => String::new(),
        };

        let messages = build_tutor_messages(ContextInputs {
            document: turn.document.as_deref(),
            web_context: &web_context,
            instructions: &self.prompts.tutor_instructions,
            history: &turn.history,
            message: &turn.message,
        });

        let reply = self.oracle.complete(&messages).await?;
        info!(
            "Chat turn answered by {} (source: {})",
            self.oracle.model_name(),
            decision
                .as_ref()
                .map(|d| d.domain.as_str())
                .unwrap_or("none")
        );

        Ok(ChatTurnOutcome {
            reply,
            chosen_domain: decision.as_ref().map(|d| d.domain.to_string()),
            query: decision.map(|d| d.query),
            web_context,
        })
    }
}
