// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! LLM completion boundary
//!
//! The assistant treats the language model as an opaque text-completion
//! oracle. Callers depend on [`CompletionOracle`]; the production
//! implementation talks to an OpenAI-compatible chat completions API.

pub mod client;
pub mod config;
pub mod oracle;
pub mod types;

pub use client::OpenAiCompatibleClient;
pub use config::LlmConfig;
pub use oracle::CompletionOracle;
pub use types::{LlmError, PromptMessage, Role};
