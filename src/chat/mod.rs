// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tutoring chat built on the source browser
//!
//! Provides:
//! - Per-turn domain selection by the model (at most one domain)
//! - Prompt assembly from document, web context and recent history
//! - Topic extraction for uploaded documents

pub mod context;
pub mod orchestrator;
pub mod prompts;
pub mod selector;
pub mod topic;

pub use context::{build_tutor_messages, ContextInputs, HistoryMessage};
pub use orchestrator::{ChatOrchestrator, ChatTurn, ChatTurnOutcome};
pub use prompts::PromptSet;
pub use selector::{parse_decision, DomainDecision, DomainSelector};
pub use topic::TopicExtractor;
