use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use shareit::adapters::in_memory::in_memory_entity_store::InMemoryEntityStore;
use shareit::core::clock::SystemClock;
use shareit::shell::config::AppConfig;
use shareit::shell::http::router;
use shareit::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shareit=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store = Arc::new(InMemoryEntityStore::new());
    let state = AppState::new(store, Arc::new(SystemClock), config.owner_pagination);

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!(%addr, owner_pagination = ?config.owner_pagination, "shareit listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
