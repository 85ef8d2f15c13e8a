// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API request types

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::chat::{ChatTurn, HistoryMessage};
use crate::llm::Role;

/// Longest accepted chat message
pub const MAX_MESSAGE_CHARS: usize = 4000;

/// Request body for POST /v1/chat/turn
///
/// Document content, history and the user's source list are looked up by
/// the caller from its own storage and passed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurnRequest {
    pub message: String,

    /// Domains the user has allow-listed
    #[serde(default)]
    pub allowed_domains: Vec<String>,

    /// Extracted text of the selected document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_content: Option<String>,

    /// Previous messages, oldest first
    #[serde(default)]
    pub history: Vec<HistoryMessage>,
}

impl ChatTurnRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.message.trim().is_empty() {
            return Err(ApiError::validation("message", "Message cannot be empty"));
        }
        if self.message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ApiError::validation(
                "message",
                format!("Message too long (max {} characters)", MAX_MESSAGE_CHARS),
            ));
        }
        if self.history.iter().any(|m| m.role == Role::System) {
            return Err(ApiError::validation(
                "history",
                "History may only contain user and assistant messages",
            ));
        }
        Ok(())
    }

    pub fn into_turn(self) -> ChatTurn {
        ChatTurn {
            message: self.message,
            allowed_domains: self.allowed_domains,
            document: self.document_content,
            history: self.history,
        }
    }
}

/// Request body for POST /v1/topic
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRequest {
    /// Already-extracted document text
    pub text: String,
}

impl TopicRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.text.trim().is_empty() {
            return Err(ApiError::validation("text", "Text cannot be empty"));
        }
        Ok(())
    }
}
