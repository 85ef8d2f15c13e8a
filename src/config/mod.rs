// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Aggregates server, retrieval and LLM settings, all loaded from the
//! environment (a `.env` file is honoured by the binaries).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmConfig;
use crate::sources::SourcesConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("Invalid sources config: {0}")]
    Sources(String),

    #[error("Invalid LLM config: {0}")]
    Llm(String),
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Optional file overriding the built-in tutor instructions
    pub tutor_prompt_path: Option<PathBuf>,
    /// Optional file overriding the built-in topic template
    pub topic_prompt_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("API_HOST").unwrap_or(defaults.host),
            port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            tutor_prompt_path: env::var("TUTOR_PROMPT_PATH").ok().map(PathBuf::from),
            topic_prompt_path: env::var("TOPIC_PROMPT_PATH").ok().map(PathBuf::from),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            tutor_prompt_path: None,
            topic_prompt_path: None,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub sources: SourcesConfig,
    pub llm: LlmConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            sources: SourcesConfig::from_env(),
            llm: LlmConfig::from_env(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;
        self.sources.validate().map_err(ConfigError::Sources)?;
        self.llm.validate().map_err(ConfigError::Llm)?;
        Ok(())
    }
}
