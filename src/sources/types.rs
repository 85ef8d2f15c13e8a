// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for scoped source retrieval

use serde::Serialize;
use std::fmt;

/// Tag prefixed to every snippet so the LLM can attribute it
pub fn source_tag(domain: &str) -> String {
    format!("[SOURCE: {}]", domain)
}

/// Sanitized text from one domain, capped in length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSnippet {
    /// Domain the text was fetched from
    pub domain: String,
    /// Extracted text, at most `max_chars` characters
    pub content: String,
}

impl SourceSnippet {
    /// Build a snippet, keeping the first `max_chars` characters of `text`
    pub fn new(domain: impl Into<String>, text: &str, max_chars: usize) -> Self {
        Self {
            domain: domain.into(),
            content: truncate_chars(text, max_chars).to_string(),
        }
    }

    /// Render as `[SOURCE: domain]\ncontent`
    pub fn render(&self) -> String {
        format!("{}\n{}", source_tag(&self.domain), self.content)
    }
}

/// Why a browse produced no content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Domain is not a registry key; nothing was fetched
    UnknownDomain,
    /// Query had no non-whitespace characters; nothing was fetched
    BlankQuery,
    /// Network error, timeout or non-2xx status
    FetchFailed,
    /// Page fetched but no content region or no text
    NoContent,
}

impl EmptyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownDomain => "unknown_domain",
            Self::BlankQuery => "blank_query",
            Self::FetchFailed => "fetch_failed",
            Self::NoContent => "no_content",
        }
    }
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one browse call
///
/// Every `Empty` renders as an empty string so prompt assembly can treat
/// "no external context" uniformly; the reason is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    Snippet(SourceSnippet),
    Empty(EmptyReason),
}

impl BrowseOutcome {
    pub fn render(&self) -> String {
        match self {
            Self::Snippet(snippet) => snippet.render(),
            Self::Empty(_) => String::new(),
        }
    }

    pub fn snippet(&self) -> Option<&SourceSnippet> {
        match self {
            Self::Snippet(snippet) => Some(snippet),
            Self::Empty(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            Self::Snippet(_) => None,
            Self::Empty(reason) => Some(*reason),
        }
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
