mod handlers;
mod kaggle;
mod notebook;
mod routes;
mod sim;


use anyhow::Context;
use axum::Router;
use fxminer_common::config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub struct AppState {
    pub config: Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("fxminer API booting...");

    let config = Config::from_env()
        .context("failed to load configuration (set KAGGLE_USERNAME and KAGGLE_KEY)")?;

    info!(
        username = %config.credentials.username,
        base_url = %config.kaggle_base_url,
        "Kaggle credentials loaded"
    );

    let addr = config.listen_addr.clone();
    let state = Arc::new(AppState { config });

    // Build router
    let app = Router::new().merge(routes::routes()).with_state(state);

    // Start server
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!("HTTP server listening on {}", addr);
    info!("Dashboard available at http://{}/", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
