// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod browse;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Study assistant CLI
#[derive(Parser, Debug)]
#[command(name = "study-cli")]
#[command(version = "0.1.0")]
#[command(about = "Operator tools for the study assistant source browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a tagged snippet from one registry domain
    Browse(browse::BrowseArgs),

    /// List the browsable domains and their search templates
    Domains,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Browse(args) => browse::browse(args).await,
        Commands::Domains => browse::list_domains(),
    }
}
