// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! User-managed source lists
//!
//! Users pick which registry domains the assistant may consult. The list
//! itself lives in external storage; this module only validates entries and
//! narrows a stored list down to domains the registry actually serves.

use std::collections::HashSet;

use thiserror::Error;

use super::registry::{AllowedDomain, DomainRegistry};

#[derive(Debug, Error, PartialEq)]
pub enum SourceListError {
    #[error("Invalid domain: {0:?}")]
    InvalidDomain(String),
}

/// Normalize a domain as entered by a user
///
/// Trims surrounding whitespace and lowercases. Anything empty or without a
/// dot is rejected.
pub fn normalize_domain(raw: &str) -> Result<String, SourceListError> {
    let domain = raw.trim().to_lowercase();
    if domain.is_empty() || !domain.contains('.') || domain.contains(char::is_whitespace) {
        return Err(SourceListError::InvalidDomain(raw.to_string()));
    }
    Ok(domain)
}

/// Keep only the user's domains that the registry knows, in stored order
pub fn filter_allowed<S: AsRef<str>>(
    registry: &DomainRegistry,
    user_domains: &[S],
) -> Vec<AllowedDomain> {
    let mut seen = HashSet::new();
    user_domains
        .iter()
        .filter_map(|d| registry.allow(d.as_ref()))
        .filter(|d| seen.insert(d.clone()))
        .collect()
}
