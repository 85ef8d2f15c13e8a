// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Browse API response types

use serde::{Deserialize, Serialize};

use crate::sources::BrowseOutcome;

/// Response body for POST /v1/browse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowseApiResponse {
    /// `"[SOURCE: domain]\n..."` or empty when nothing was retrieved
    pub text: String,
}

impl From<&BrowseOutcome> for BrowseApiResponse {
    fn from(outcome: &BrowseOutcome) -> Self {
        Self {
            text: outcome.render(),
        }
    }
}
