use catalog_service::services::store::InMemoryBookStore;
use catalog_service::{router, AppState, Config, Store};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let store: Store = Arc::new(InMemoryBookStore::seeded());
    let state = AppState::new(store, &config);
    let app = router(state, &config);

    let addr = config.addr();
    info!(
        "Catalog service starting on {} (uploads in {})",
        addr,
        config.upload_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
