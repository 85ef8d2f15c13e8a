// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Source browsing orchestration
//!
//! Resolves a forced domain to its search URL, fetches once and extracts a
//! tagged snippet. Exactly one domain and one fetch attempt per call.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::SourcesConfig;
use super::extractor::extract_clean_text;
use super::fetcher::{FetchError, HttpPageFetcher, PageFetcher};
use super::registry::DomainRegistry;
use super::types::{BrowseOutcome, EmptyReason, SourceSnippet};

/// Fetches sanitized context from a single registry domain
pub struct SourceBrowser {
    registry: Arc<DomainRegistry>,
    fetcher: Arc<dyn PageFetcher>,
    config: SourcesConfig,
}

impl SourceBrowser {
    pub fn new(
        registry: Arc<DomainRegistry>,
        fetcher: Arc<dyn PageFetcher>,
        config: SourcesConfig,
    ) -> Self {
        Self {
            registry,
            fetcher,
            config,
        }
    }

    /// Browser over HTTP using the configured timeout and user agent
    pub fn with_http(
        registry: Arc<DomainRegistry>,
        config: SourcesConfig,
    ) -> Result<Self, FetchError> {
        let fetcher = Arc::new(HttpPageFetcher::new(&config)?);
        Ok(Self::new(registry, fetcher, config))
    }

    /// Browse `domain` for `query`
    ///
    /// Domains outside the registry are rejected before any network call.
    /// Never fails: every problem becomes `BrowseOutcome::Empty` with a
    /// reason that is logged but not surfaced further.
    pub async fn browse(&self, query: &str, domain: &str) -> BrowseOutcome {
        let Some(allowed) = self.registry.allow(domain) else {
            warn!("Refusing to browse unregistered domain: {:?}", domain);
            return BrowseOutcome::Empty(EmptyReason::UnknownDomain);
        };

        if query.trim().is_empty() {
            debug!("Blank query for {}, skipping fetch", allowed);
            return BrowseOutcome::Empty(EmptyReason::BlankQuery);
        }

        let url = self.registry.search_url(&allowed, query);
        let start = Instant::now();

        let html = match self.fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Source fetch failed for {}: {}", allowed, e);
                return BrowseOutcome::Empty(EmptyReason::FetchFailed);
            }
        };

        let Some(text) = extract_clean_text(&html) else {
            debug!("No content region in page from {}", url);
            return BrowseOutcome::Empty(EmptyReason::NoContent);
        };

        let snippet = SourceSnippet::new(allowed.as_str(), &text, self.config.max_snippet_chars);
        info!(
            "Browsed {}: {} chars in {}ms",
            allowed,
            snippet.content.chars().count(),
            start.elapsed().as_millis()
        );

        BrowseOutcome::Snippet(snippet)
    }

    /// Boundary form of [`browse`](Self::browse)
    ///
    /// Returns `"[SOURCE: domain]\n<text>"` or an empty string.
    pub async fn browse_allowed_sources(&self, query: &str, forced_domain: &str) -> String {
        self.browse(query, forced_domain).await.render()
    }

    pub fn registry(&self) -> &Arc<DomainRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &SourcesConfig {
        &self.config
    }
}
