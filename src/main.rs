// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use std::{env, sync::Arc};
use study_assistant::{
    api::{start_server, AppState},
    chat::PromptSet,
    config::ServiceConfig,
    llm::{CompletionOracle, OpenAiCompatibleClient},
    sources::{DomainRegistry, SourceBrowser},
    version,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting study assistant...");
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!();

    let config = ServiceConfig::from_env();
    config.validate().context("invalid configuration")?;

    // Registry of browsable domains; templates are fixed at startup
    let registry = Arc::new(DomainRegistry::default());
    println!(
        "🔍 Source registry: {}",
        registry.domains().collect::<Vec<_>>().join(", ")
    );

    let browser = Arc::new(
        SourceBrowser::with_http(registry, config.sources.clone())
            .context("failed to build source fetcher")?,
    );
    println!(
        "✅ Source browser ready (timeout {}s, user agent {:?}, snippet cap {} chars)",
        config.sources.fetch_timeout_secs,
        config.sources.user_agent,
        config.sources.max_snippet_chars
    );

    let oracle: Option<Arc<dyn CompletionOracle>> = if config.llm.is_configured() {
        let client = OpenAiCompatibleClient::new(&config.llm)?;
        println!("🧠 LLM: {} at {}", config.llm.model, config.llm.base_url);
        let client: Arc<dyn CompletionOracle> = Arc::new(client);
        Some(client)
    } else {
        println!("⚠️  OPENAI_API_KEY not set");
        println!("   /v1/chat/turn and /v1/topic will return 503");
        None
    };

    let prompts = PromptSet::load(
        config.server.tutor_prompt_path.as_deref(),
        config.server.topic_prompt_path.as_deref(),
    )?;

    let state = AppState::new(browser, oracle, Arc::new(prompts));
    let addr = config.server.socket_addr()?;

    tokio::select! {
        result = start_server(addr, state) => result?,
        _ = tokio::signal::ctrl_c() => {
            println!("\n🛑 Shutting down...");
        }
    }

    Ok(())
}
