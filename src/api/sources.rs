// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Source registry endpoints
//!
//! Lets the sources UI list browsable domains and check a user's entry
//! before storing it.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::sources::normalize_domain;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistryResponse {
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateSourceRequest {
    pub domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidateSourceResponse {
    /// Normalized form of the submitted domain
    pub domain: String,
    /// Whether the registry can browse it
    pub allowed: bool,
}

/// GET /v1/sources/registry - List browsable domains
pub async fn registry_handler(State(state): State<AppState>) -> Json<RegistryResponse> {
    Json(RegistryResponse {
        domains: state.registry.domains().map(str::to_string).collect(),
    })
}

/// POST /v1/sources/validate - Normalize and check a domain
///
/// # Errors
/// - 400 Bad Request: Empty or dotless domain
pub async fn validate_source_handler(
    State(state): State<AppState>,
    Json(request): Json<ValidateSourceRequest>,
) -> Result<Json<ValidateSourceResponse>, ApiError> {
    let domain = normalize_domain(&request.domain)
        .map_err(|e| ApiError::validation("domain", e.to_string()))?;

    Ok(Json(ValidateSourceResponse {
        allowed: state.registry.contains(&domain),
        domain,
    }))
}
