use anyhow::{Context, Result};
use clap::Parser;
use gridnorm_server::{create_router, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .init();

    let app = create_router(AppState::default(), &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    tracing::info!(addr = %config.addr, "gridnorm-server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
