// Market Directory - API Server

use std::sync::Arc;

use anyhow::Result;

use market_directory::api::{router, AppState};
use market_directory::bootstrap;
use market_directory::domain::{Category, Vendor};
use market_directory::store::{DocumentStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Log filtering is controlled via the RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Market Directory - API Server v{}", market_directory::VERSION);

    let categories: Arc<dyn DocumentStore<Category>> = Arc::new(MemoryStore::new());
    let vendors: Arc<dyn DocumentStore<Vendor>> = Arc::new(MemoryStore::new());

    // Seed default data before accepting traffic; a seeding failure
    // aborts startup.
    bootstrap::seed(categories.as_ref(), vendors.as_ref()).await?;

    let state = AppState { categories, vendors };
    let app = router(state);

    let addr =
        std::env::var("MARKET_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "server listening");
    println!("Server running on http://{addr}");
    println!("  API: http://{addr}/api/v1/categories/");

    axum::serve(listener, app).await?;

    Ok(())
}
