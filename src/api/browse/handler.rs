// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Browse API endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::request::BrowseApiRequest;
use super::response::BrowseApiResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /v1/browse - Fetch context from one allow-listed domain
///
/// # Request
/// - `query`: Free-text query (required, max 500 chars)
/// - `forcedDomain`: Domain to consult
///
/// # Response
/// - `text`: `"[SOURCE: domain]\n..."`, or empty if the domain is not
///   registered or nothing could be retrieved
///
/// # Errors
/// - 400 Bad Request: Empty or oversized query, empty domain
pub async fn browse_handler(
    State(state): State<AppState>,
    Json(request): Json<BrowseApiRequest>,
) -> Result<Json<BrowseApiResponse>, ApiError> {
    debug!(
        "Browse request: {:?} on {:?}",
        request.query, request.forced_domain
    );

    if let Err(e) = request.validate() {
        warn!("Browse validation failed: {}", e);
        return Err(e);
    }

    let outcome = state
        .browser
        .browse(&request.query, &request.forced_domain)
        .await;

    Ok(Json(BrowseApiResponse::from(&outcome)))
}
