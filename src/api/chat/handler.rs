// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat and topic endpoint handlers

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::request::{ChatTurnRequest, TopicRequest};
use super::response::{ChatTurnResponse, TopicResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /v1/chat/turn - Answer one tutoring message
///
/// The model may consult at most one of the request's allowed domains.
///
/// # Errors
/// - 400 Bad Request: Empty or oversized message
/// - 503 Service Unavailable: No LLM configured
/// - 502 Bad Gateway: The LLM call failed
pub async fn chat_turn_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatTurnRequest>,
) -> Result<Json<ChatTurnResponse>, ApiError> {
    request.validate()?;

    let orchestrator = state.chat.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Chat requires an LLM API key".to_string())
    })?;

    debug!(
        "Chat turn with {} allowed domains, {} history messages",
        request.allowed_domains.len(),
        request.history.len()
    );

    let outcome = orchestrator
        .run_turn(&request.into_turn())
        .await
        .map_err(|e| {
            warn!("Chat turn failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(ChatTurnResponse::from(outcome)))
}

/// POST /v1/topic - Derive a topic label for document text
///
/// # Errors
/// - 400 Bad Request: Empty text
/// - 503 Service Unavailable: No LLM configured
/// - 502 Bad Gateway: The LLM call failed
pub async fn topic_handler(
    State(state): State<AppState>,
    Json(request): Json<TopicRequest>,
) -> Result<Json<TopicResponse>, ApiError> {
    request.validate()?;

    let extractor = state.topics.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Topic extraction requires an LLM API key".to_string())
    })?;

    let topic = extractor.extract(&request.text).await?;
    Ok(Json(TopicResponse { topic }))
}
