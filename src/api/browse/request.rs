// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Browse API request types

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Longest accepted query
pub const MAX_QUERY_CHARS: usize = 500;

/// Request body for POST /v1/browse
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseApiRequest {
    /// Free-text query (required, max 500 chars)
    pub query: String,

    /// The single domain to consult
    pub forced_domain: String,
}

impl BrowseApiRequest {
    /// Validate the request
    ///
    /// An unregistered domain is not a validation error; it simply browses
    /// to an empty result.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.query.trim().is_empty() {
            return Err(ApiError::validation("query", "Query cannot be empty"));
        }
        if self.query.chars().count() > MAX_QUERY_CHARS {
            return Err(ApiError::validation(
                "query",
                format!("Query too long (max {} characters)", MAX_QUERY_CHARS),
            ));
        }
        if self.forced_domain.trim().is_empty() {
            return Err(ApiError::validation(
                "forcedDomain",
                "Domain cannot be empty",
            ));
        }
        Ok(())
    }
}
