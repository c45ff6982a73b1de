mod analysis;
mod api_client;
mod cli;
mod commands;
mod config;
mod errors;
mod models;
mod roadmap;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::ApiClient;
use crate::commands::AppContext;
use crate::config::Config;
use crate::storage::{FileStore, ProgressStore};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Load configuration first (fails fast on a missing token)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("careergap_cli={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("CareerGap client v{}", env!("CARGO_PKG_VERSION"));

    // Remote service client and local progress store
    let api = ApiClient::new(config.api_base_url.clone(), config.token.clone());
    let store: Arc<dyn ProgressStore> = Arc::new(FileStore::new(config.data_dir.clone())?);

    let ctx = AppContext { api, store };

    if let Err(error) = commands::dispatch(args.command, &ctx).await {
        eprintln!("careergap error: {error}");
        if let Some(remedy) = error.remedy() {
            eprintln!("hint: {remedy}");
        }
        std::process::exit(1);
    }

    Ok(())
}
