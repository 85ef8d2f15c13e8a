// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! LLM-driven domain selection
//!
//! Once per chat turn the model is shown the user's allowed domains and
//! asked whether an external lookup would help. At most one domain is
//! chosen, and only a domain from the allowed list is ever accepted.

use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::llm::{CompletionOracle, PromptMessage};
use crate::sources::AllowedDomain;

/// A validated choice to browse one domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainDecision {
    pub domain: AllowedDomain,
    pub query: String,
}

#[derive(Debug, Deserialize)]
struct RawDecision {
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    query: Option<String>,
}

/// Build the system prompt listing the allowed domains
pub fn selection_prompt(allowed: &[AllowedDomain]) -> String {
    let domains = allowed
        .iter()
        .map(AllowedDomain::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You may request information from EXACTLY ONE of the following allowed domains:\n\n\
         {domains}\n\n\
         If external information is useful, respond ONLY in valid JSON:\n\n\
         {{\n  \"domain\": \"<one allowed domain>\",\n  \"query\": \"<search query>\"\n}}\n\n\
         If no external information is needed, respond with:\n\n\
         {{ \"domain\": null }}\n"
    )
}

/// Interpret the model's reply
///
/// Accepts bare JSON or JSON wrapped in prose/code fences. Returns `None`
/// when the reply is unparseable, declines a lookup, or names a domain not
/// in `allowed`. A missing or blank query falls back to `message`.
pub fn parse_decision(
    raw: &str,
    allowed: &[AllowedDomain],
    message: &str,
) -> Option<DomainDecision> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    let decision: RawDecision = match serde_json::from_str(&raw[start..=end]) {
        Ok(d) => d,
        Err(e) => {
            debug!("Unparseable domain selection: {}", e);
            return None;
        }
    };

    let chosen = decision.domain?.trim().to_lowercase();
    let Some(domain) = allowed.iter().find(|d| d.as_str() == chosen).cloned() else {
        warn!("Model chose a domain outside the allowed list: {:?}", chosen);
        return None;
    };

    let query = decision
        .query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| message.trim().to_string());

    Some(DomainDecision { domain, query })
}

/// Picks at most one domain per chat turn
pub struct DomainSelector {
    oracle: Arc<dyn CompletionOracle>,
}

impl DomainSelector {
    pub fn new(oracle: Arc<dyn CompletionOracle>) -> Self {
        Self { oracle }
    }

    /// Ask the model whether to browse, and where
    ///
    /// Never fails: an empty allow-list skips the model call entirely, and
    /// oracle errors are logged and treated as "no lookup".
    pub async fn select(&self, allowed: &[AllowedDomain], message: &str) -> Option<DomainDecision> {
        if allowed.is_empty() {
            debug!("No allowed domains, skipping selection");
            return None;
        }

        let messages = [
            PromptMessage::system(selection_prompt(allowed)),
            PromptMessage::user(message),
        ];

        match self.oracle.complete(&messages).await {
            Ok(reply) => {
                let decision = parse_decision(&reply, allowed, message);
                debug!("Domain selection: {:?}", decision);
                decision
            }
            Err(e) => {
                warn!("Domain selection failed, continuing without sources: {}", e);
                None
            }
        }
    }
}
