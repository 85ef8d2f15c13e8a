// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Scoped web-content retrieval
//!
//! Fetches supplementary context for a chat turn from a fixed registry of
//! reference domains:
//! - Domain registry mapping each domain to its search URL template
//! - Single-attempt HTTP fetching with timeout and identifying user agent
//! - Structural HTML sanitization and main-content extraction
//! - Source-tagged, length-capped snippets for prompt assembly
//!
//! ```text
//! (query, domain) → DomainRegistry → search URL → PageFetcher → HTML
//!                                                              ↓
//!                         "[SOURCE: domain]\n…" ← SourceSnippet ← extract_clean_text
//! ```
//!
//! Every failure collapses to an empty result. There is no caching and no
//! upstream throttling.

pub mod allow_list;
pub mod browser;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod registry;
pub mod types;

pub use allow_list::{filter_allowed, normalize_domain, SourceListError};
pub use browser::SourceBrowser;
pub use config::SourcesConfig;
pub use extractor::extract_clean_text;
pub use fetcher::{FetchError, HttpPageFetcher, PageFetcher};
pub use registry::{AllowedDomain, DomainRegistry, RegistryError, SearchUrlTemplate};
pub use types::{BrowseOutcome, EmptyReason, SourceSnippet};
