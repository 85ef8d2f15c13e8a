// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API response types

use serde::{Deserialize, Serialize};

use crate::chat::ChatTurnOutcome;

/// Response body for POST /v1/chat/turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurnResponse {
    pub reply: String,

    /// Domain consulted this turn, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_domain: Option<String>,

    /// Query sent to that domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Whether any external text made it into the prompt
    pub web_context_used: bool,
}

impl From<ChatTurnOutcome> for ChatTurnResponse {
    fn from(outcome: ChatTurnOutcome) -> Self {
        Self {
            web_context_used: !outcome.web_context.is_empty(),
            reply: outcome.reply,
            chosen_domain: outcome.chosen_domain,
            query: outcome.query,
        }
    }
}

/// Response body for POST /v1/topic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicResponse {
    pub topic: String,
}
