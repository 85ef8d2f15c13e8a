// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML sanitization and main-content extraction
//!
//! The document is parsed once and never mutated. Noise subtrees are
//! recorded up front and their text is skipped during extraction.

use std::collections::HashSet;

use scraper::{Html, Selector};

/// Elements whose whole subtree is boilerplate
pub const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside", "form"];

/// Content regions in priority order
const REGION_TAGS: &[&str] = &["main", "article", "body"];

/// Extract the visible text of the primary content region
///
/// Region priority is `<main>`, then `<article>`, then `<body>`; a candidate
/// sitting inside a noise subtree does not count. Text nodes are trimmed,
/// joined with single spaces and whitespace-collapsed.
///
/// Returns `None` when no region exists or the chosen region has no text.
pub fn extract_clean_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let noise = Selector::parse(&NOISE_TAGS.join(", ")).ok()?;
    let excluded: HashSet<_> = document.select(&noise).map(|el| el.id()).collect();

    let mut region = None;
    for tag in REGION_TAGS {
        let Ok(selector) = Selector::parse(tag) else {
            continue;
        };
        region = document
            .select(&selector)
            .find(|el| !el.ancestors().any(|a| excluded.contains(&a.id())));
        if region.is_some() {
            break;
        }
    }
    let region = region?;

    let mut parts = Vec::new();
    for node in region.descendants() {
        if node.ancestors().any(|a| excluded.contains(&a.id())) {
            continue;
        }
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let inside_noscript = node
            .parent()
            .and_then(|p| p.value().as_element())
            .is_some_and(|el| el.name() == "noscript");
        if inside_noscript {
            // Scripting-enabled parsing keeps noscript content as raw markup
            parts.extend(fragment_text(text, &noise));
        } else {
            parts.push(text.trim().to_string());
        }
    }

    let cleaned = collapse_whitespace(&parts.join(" "));
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Visible text of a markup fragment, skipping noise subtrees
fn fragment_text(markup: &str, noise: &Selector) -> Vec<String> {
    let fragment = Html::parse_fragment(markup);
    let excluded: HashSet<_> = fragment.select(noise).map(|el| el.id()).collect();

    fragment
        .root_element()
        .descendants()
        .filter(|node| !node.ancestors().any(|a| excluded.contains(&a.id())))
        .filter_map(|node| node.value().as_text().map(|t| t.trim().to_string()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Collapse runs of whitespace (spaces, tabs, newlines) to one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
