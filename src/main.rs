// src/main.rs
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use piarapp::cli::{self, Cli, Context};
use piarapp::common::Config;
use piarapp::session::{FileSessionStore, SessionManager};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let mut config = Config::from_env();
    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }

    // ========================================================================
    // SESSION SETUP
    // ========================================================================

    let store = Arc::new(FileSessionStore::new(config.session_file.clone()));
    let api = Arc::new(SessionManager::new(&config, store));
    api.initialize().await?;

    let ctx = Context { api, config };

    if let Err(e) = cli::run(cli.command, &ctx).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
