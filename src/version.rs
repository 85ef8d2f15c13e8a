// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the study assistant service

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-scoped-sources-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "scoped-source-browsing",
    "llm-domain-selection",
    "tutor-chat",
    "topic-extraction",
];
