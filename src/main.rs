use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use slotbook::config::AppConfig;
use slotbook::state::AppState;
use slotbook::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let state = Arc::new(AppState {
        store: Store::new(),
        config: config.clone(),
    });

    let app = slotbook::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
