// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::browse::browse_handler;
use super::chat::{chat_turn_handler, topic_handler};
use super::sources::{registry_handler, validate_source_handler};
use crate::chat::{ChatOrchestrator, PromptSet, TopicExtractor};
use crate::llm::CompletionOracle;
use crate::sources::{DomainRegistry, SourceBrowser};
use crate::version;

/// Shared handler state
///
/// Chat and topic handlers are `None` when no LLM is configured; browsing
/// works regardless.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<DomainRegistry>,
    pub browser: Arc<SourceBrowser>,
    pub chat: Option<Arc<ChatOrchestrator>>,
    pub topics: Option<Arc<TopicExtractor>>,
}

impl AppState {
    /// Wire up state from a browser and an optional oracle
    pub fn new(
        browser: Arc<SourceBrowser>,
        oracle: Option<Arc<dyn CompletionOracle>>,
        prompts: Arc<PromptSet>,
    ) -> Self {
        let chat = oracle.as_ref().map(|o| {
            Arc::new(ChatOrchestrator::new(
                browser.clone(),
                o.clone(),
                prompts.clone(),
            ))
        });
        let topics =
            oracle.map(|o| Arc::new(TopicExtractor::new(o, prompts.topic_template.clone())));

        Self {
            registry: browser.registry().clone(),
            browser,
            chat,
            topics,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub chat_enabled: bool,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Source registry
        .route("/v1/sources/registry", get(registry_handler))
        .route("/v1/sources/validate", post(validate_source_handler))
        // Retrieval
        .route("/v1/browse", post(browse_handler))
        // Chat
        .route("/v1/chat/turn", post(chat_turn_handler))
        .route("/v1/topic", post(topic_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Request/response spans
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION.to_string(),
        chat_enabled: state.chat.is_some(),
    })
}
