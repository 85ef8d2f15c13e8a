// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod llm;
pub mod sources;
pub mod version;

// Re-export main types
pub use chat::{ChatOrchestrator, ChatTurn, ChatTurnOutcome, DomainSelector, TopicExtractor};
pub use config::ServiceConfig;
pub use llm::{CompletionOracle, LlmError, OpenAiCompatibleClient};
pub use sources::{BrowseOutcome, DomainRegistry, SourceBrowser, SourcesConfig};
