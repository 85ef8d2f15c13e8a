// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Static registry of browsable domains
//!
//! Maps each permitted domain to the URL template of its search endpoint.
//! The registry is built once at startup and shared read-only; there is no
//! way to add or change a template after construction.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use url::Url;

use super::allow_list::normalize_domain;

/// Placeholder substituted with the percent-encoded query
pub const QUERY_SLOT: &str = "{query}";

/// Production domains and their search endpoints, in preference order
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("britannica.com", "https://www.britannica.com/search?query={query}"),
    (
        "wikipedia.org",
        "https://en.wikipedia.org/w/index.php?search={query}&title=Special:Search&go=Go",
    ),
    ("plato.stanford.edu", "https://plato.stanford.edu/entries/{query}/"),
    ("iep.utm.edu", "https://iep.utm.edu/{query}/"),
    ("ocw.mit.edu", "https://ocw.mit.edu/search/?q={query}"),
    ("openstax.org", "https://openstax.org/search?query={query}"),
    ("nap.edu", "https://www.nap.edu/search/?terms={query}"),
    (
        "arxiv.org",
        "https://export.arxiv.org/api/query?search_query=all:{query}",
    ),
    ("nasa.gov", "https://www.nasa.gov/search?q={query}"),
    ("bbc.co.uk", "https://www.bbc.co.uk/search?q={query}"),
];

/// Errors raised while building a registry
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Invalid domain '{0}'")]
    InvalidDomain(String),

    #[error("Template for {domain} must contain exactly one {{query}} slot")]
    BadSlotCount { domain: String },

    #[error("Template for {domain} is not a valid http(s) URL: {reason}")]
    InvalidTemplate { domain: String, reason: String },

    #[error("Template host '{host}' does not belong to {domain}")]
    HostMismatch { domain: String, host: String },

    #[error("Domain {0} registered twice")]
    Duplicate(String),
}

/// A search URL template with a single query slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUrlTemplate(String);

impl SearchUrlTemplate {
    fn parse(domain: &str, template: &str) -> Result<Self, RegistryError> {
        if template.matches(QUERY_SLOT).count() != 1 {
            return Err(RegistryError::BadSlotCount {
                domain: domain.to_string(),
            });
        }

        let probe = template.replace(QUERY_SLOT, "probe");
        let parsed = Url::parse(&probe).map_err(|e| RegistryError::InvalidTemplate {
            domain: domain.to_string(),
            reason: e.to_string(),
        })?;

        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(RegistryError::InvalidTemplate {
                domain: domain.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let host = parsed.host_str().unwrap_or_default().to_lowercase();
        if host != domain && !host.ends_with(&format!(".{}", domain)) {
            return Err(RegistryError::HostMismatch {
                domain: domain.to_string(),
                host,
            });
        }

        Ok(Self(template.to_string()))
    }

    /// Substitute an already-encoded query into the slot
    fn fill(&self, encoded_query: &str) -> String {
        self.0.replacen(QUERY_SLOT, encoded_query, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A domain that is known to be a registry key
///
/// Only [`DomainRegistry::allow`] hands these out, so holding one proves the
/// domain has a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllowedDomain(String);

impl AllowedDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AllowedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable `domain -> search template` table
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    order: Vec<String>,
    templates: HashMap<String, SearchUrlTemplate>,
}

impl DomainRegistry {
    /// Build a registry from `(domain, template)` pairs
    ///
    /// Domains are normalized to lowercase. Every template must contain one
    /// `{query}` slot and point at the domain it is registered under.
    pub fn from_entries<I, D, T>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (D, T)>,
        D: AsRef<str>,
        T: AsRef<str>,
    {
        let mut order = Vec::new();
        let mut templates = HashMap::new();

        for (domain, template) in entries {
            let domain = normalize_domain(domain.as_ref())
                .map_err(|_| RegistryError::InvalidDomain(domain.as_ref().to_string()))?;
            let template = SearchUrlTemplate::parse(&domain, template.as_ref())?;

            if templates.insert(domain.clone(), template).is_some() {
                return Err(RegistryError::Duplicate(domain));
            }
            order.push(domain);
        }

        Ok(Self { order, templates })
    }

    /// Look up the template for an exact registry key
    pub fn lookup(&self, domain: &str) -> Option<&SearchUrlTemplate> {
        self.templates.get(domain)
    }

    /// Validate a caller-supplied domain against the registry
    ///
    /// Input is trimmed and lowercased first. Unknown or malformed domains
    /// yield `None`.
    pub fn allow(&self, domain: &str) -> Option<AllowedDomain> {
        let normalized = normalize_domain(domain).ok()?;
        self.templates
            .contains_key(&normalized)
            .then(|| AllowedDomain(normalized))
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.allow(domain).is_some()
    }

    /// Build the search URL for `query` on `domain`
    ///
    /// The query is percent-encoded, so the result never contains literal
    /// spaces or unescaped reserved characters from the query.
    pub fn search_url(&self, domain: &AllowedDomain, query: &str) -> String {
        let encoded = urlencoding::encode(query.trim());
        // AllowedDomain values only come from this registry
        match self.templates.get(domain.as_str()) {
            Some(template) => template.fill(&encoded),
            None => String::new(),
        }
    }

    /// Registered domains in registration order
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        let mut order = Vec::with_capacity(DEFAULT_ENTRIES.len());
        let mut templates = HashMap::with_capacity(DEFAULT_ENTRIES.len());
        for (domain, template) in DEFAULT_ENTRIES {
            order.push(domain.to_string());
            templates.insert(domain.to_string(), SearchUrlTemplate(template.to_string()));
        }
        Self { order, templates }
    }
}
