// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Message and error types shared by LLM callers

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Author of a prompt message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Errors from a completion call
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key configured
    #[error("LLM API key not configured")]
    MissingApiKey,

    /// Non-success status from the completion endpoint
    #[error("LLM API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Network or decoding failure
    #[error("LLM transport error: {0}")]
    Transport(String),

    /// Response carried no completion text
    #[error("LLM returned no choices")]
    EmptyResponse,
}
