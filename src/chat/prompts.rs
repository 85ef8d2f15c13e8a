// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt templates for tutoring and topic extraction
//!
//! Built-in defaults can be replaced by files named in the server config.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Slot in the topic template replaced by the document text
pub const TEXT_SLOT: &str = "{TEXT}";

const DEFAULT_TUTOR_INSTRUCTIONS: &str = "\
Guide the student toward understanding rather than handing out answers.
Ground explanations in the document context first; use the external reference
material only to fill gaps, and say which source a fact came from.
Ask one short follow-up question to check understanding.
If neither context covers the question, say so plainly.";

const DEFAULT_TOPIC_TEMPLATE: &str = "\
Read the following study material and name its main topic in a few words.
Respond with a single line of the form:
Topic: <topic>

Material:
{TEXT}";

#[derive(Debug, Clone)]
pub struct PromptSet {
    pub tutor_instructions: String,
    pub topic_template: String,
}

impl PromptSet {
    /// Load overrides from disk, falling back to built-in defaults
    pub fn load(tutor_path: Option<&Path>, topic_path: Option<&Path>) -> Result<Self> {
        let mut prompts = Self::default();

        if let Some(path) = tutor_path {
            prompts.tutor_instructions = fs::read_to_string(path)
                .with_context(|| format!("reading tutor prompt {}", path.display()))?;
        }
        if let Some(path) = topic_path {
            let template = fs::read_to_string(path)
                .with_context(|| format!("reading topic prompt {}", path.display()))?;
            if !template.contains(TEXT_SLOT) {
                anyhow::bail!("topic prompt {} has no {} slot", path.display(), TEXT_SLOT);
            }
            prompts.topic_template = template;
        }

        Ok(prompts)
    }
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            tutor_instructions: DEFAULT_TUTOR_INSTRUCTIONS.to_string(),
            topic_template: DEFAULT_TOPIC_TEMPLATE.to_string(),
        }
    }
}
