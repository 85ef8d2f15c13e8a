// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Args;
use std::sync::Arc;
use tracing::info;

use crate::sources::{DomainRegistry, EmptyReason, SourceBrowser, SourcesConfig};

/// Arguments for the browse command
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Free-text query
    #[arg(long, short)]
    pub query: String,

    /// Registry domain to consult (e.g. wikipedia.org)
    #[arg(long, short)]
    pub domain: String,

    /// Override the fetch timeout in seconds
    #[arg(long, env = "SOURCE_FETCH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Browse one domain and print the snippet
pub async fn browse(args: BrowseArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let mut config = SourcesConfig::from_env();
    if let Some(secs) = args.timeout_secs {
        config.fetch_timeout_secs = secs;
    }
    config.validate().map_err(|e| anyhow!(e))?;

    let registry = Arc::new(DomainRegistry::default());
    let browser = SourceBrowser::with_http(registry, config)?;

    info!("Browsing {} for {:?}", args.domain, args.query);
    let outcome = browser.browse(&args.query, &args.domain).await;

    match outcome.empty_reason() {
        None => {
            println!("{}", outcome.render());
            Ok(())
        }
        Some(EmptyReason::UnknownDomain) => Err(anyhow!(
            "{} is not in the source registry (see `study-cli domains`)",
            args.domain
        )),
        Some(reason) => {
            eprintln!("No content retrieved ({})", reason);
            Ok(())
        }
    }
}

/// Print each registry domain with its search template
pub fn list_domains() -> Result<()> {
    let registry = DomainRegistry::default();
    for domain in registry.domains() {
        let template = registry
            .lookup(domain)
            .map(|t| t.as_str())
            .unwrap_or_default();
        println!("{:<20} {}", domain, template);
    }
    Ok(())
}
