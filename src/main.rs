mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod normalize;
mod parser;
mod pipeline;
mod render;
mod sanitize;

use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Herald v{}", env!("CARGO_PKG_VERSION"));

    let input: PathBuf = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => bail!("Usage: herald <resume.pdf|resume.docx>"),
    };

    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let output = pipeline::convert(&input, &config, &llm).await?;
    info!("Conversion complete: {}", output.display());

    Ok(())
}
