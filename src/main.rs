// Entry point.
// Loads configuration, sets up logging, and serves /queued_jobs.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use github_runner_scaler::{
    Config, GitHubClient, QueuedJobCounter, ScalerState, TtlCache, build_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::parse();

    let client = GitHubClient::new(config.github_url(), &config.token, config.request_timeout())
        .context("failed to create GitHub client")?;
    let state = ScalerState {
        cache: Arc::new(TtlCache::new(config.cache_ttl())),
        counter: Arc::new(QueuedJobCounter::new(client, config.organization.clone())),
    };

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(
        %addr,
        github_url = config.github_url(),
        org = state.counter.org(),
        cache_timeout = state.cache.ttl().as_secs(),
        "starting server"
    );

    axum::serve(listener, build_router(state))
        .await
        .context("server failed")?;
    Ok(())
}
