use anyhow::Context;
use auto_shorts::config::settings::AppConfig;
use auto_shorts::infrastructure::memory::store::MemoryStore;
use auto_shorts::state::AppState;
use auto_shorts::{app, workers};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::new();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!("Starting server...");

    let store = MemoryStore::new();
    if let Some(retention) = config.retention() {
        tokio::spawn(workers::janitor::start_janitor_worker(
            store.clone(),
            retention,
            config.janitor_interval(),
        ));
    }

    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = app::create_app(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
