mod app;
mod middlewares;
mod routes;
mod services;
mod types;
mod utils;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use types::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Starting app...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    if config.supabase.is_none() {
        warn!("SUPABASE_URL or SUPABASE_ANON_KEY not set, record and auth routes will fail");
    }
    if config.auth_key.is_none() {
        info!("API_AUTH_KEY not set, routes are open");
    }

    let bind_addr = config.bind_addr;
    let app = app::gen_app(config).context("Failed to build HTTP clients")?;

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
