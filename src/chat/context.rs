// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt assembly for tutoring turns

use serde::{Deserialize, Serialize};

use crate::llm::{PromptMessage, Role};
use crate::sources::types::truncate_chars;

/// Characters of the uploaded document included in the prompt
pub const MAX_DOCUMENT_CHARS: usize = 2000;

/// Characters of browsed web context included in the prompt
pub const MAX_WEB_CONTEXT_CHARS: usize = 2000;

/// Most recent history messages replayed to the model
pub const MAX_HISTORY_MESSAGES: usize = 12;

const TUTOR_PERSONA: &str = "You are an AI tutor following the specified framework.";

/// A stored chat message supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMessage {
    pub role: Role,
    pub content: String,
}

/// Everything needed to build the tutoring prompt
#[derive(Debug, Clone, Copy)]
pub struct ContextInputs<'a> {
    pub document: Option<&'a str>,
    pub web_context: &'a str,
    pub instructions: &'a str,
    /// Oldest first
    pub history: &'a [HistoryMessage],
    pub message: &'a str,
}

fn section(text: Option<&str>, max_chars: usize) -> &str {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => truncate_chars(t, max_chars),
        _ => "None",
    }
}

/// Build the context system message
pub fn context_block(document: Option<&str>, web_context: &str, instructions: &str) -> String {
    format!(
        "\nDOCUMENT CONTEXT:\n{}\n\nEXTERNAL REFERENCE MATERIAL:\n{}\n\nINSTRUCTIONS:\n{}\n",
        section(document, MAX_DOCUMENT_CHARS),
        section(Some(web_context), MAX_WEB_CONTEXT_CHARS),
        instructions.trim()
    )
}

/// Assemble the full message list for a tutoring completion
///
/// Persona, context block, the last [`MAX_HISTORY_MESSAGES`] history
/// entries, then the user's message.
pub fn build_tutor_messages(inputs: ContextInputs<'_>) -> Vec<PromptMessage> {
    let skip = inputs.history.len().saturating_sub(MAX_HISTORY_MESSAGES);

    let mut messages = Vec::with_capacity(3 + MAX_HISTORY_MESSAGES);
    messages.push(PromptMessage::system(TUTOR_PERSONA));
    messages.push(PromptMessage::system(context_block(
        inputs.document,
        inputs.web_context,
        inputs.instructions,
    )));
    messages.extend(inputs.history.iter().skip(skip).map(|m| PromptMessage {
        role: m.role,
        content: m.content.clone(),
    }));
    messages.push(PromptMessage::user(inputs.message));
    messages
}
