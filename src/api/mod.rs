// Market Directory - HTTP API
// Route table and shared state; one handler module per resource family.

pub mod categories;
mod error;
pub mod vendors;

pub use error::ApiError;

use std::sync::Arc;

use axum::response::{IntoResponse, Json};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::domain::{Category, Vendor};
use crate::store::DocumentStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn DocumentStore<Category>>,
    pub vendors: Arc<dyn DocumentStore<Vendor>>,
}

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "OK" }))
}

/// Build the application router.
///
/// List and get-by-id answer on the trailing-slash form of the path;
/// create, full update and partial update answer on the bare form. The
/// paths are kept exactly as clients of the original service expect them.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/v1/categories", post(categories::create))
        .route("/api/v1/categories/", get(categories::list))
        .route(
            "/api/v1/categories/:id",
            put(categories::full_update).patch(categories::partial_update),
        )
        .route("/api/v1/categories/:id/", get(categories::get_by_id))
        .route("/api/v1/vendors", post(vendors::create))
        .route("/api/v1/vendors/", get(vendors::list))
        .route(
            "/api/v1/vendors/:id",
            put(vendors::full_update).patch(vendors::partial_update),
        )
        .route("/api/v1/vendors/:id/", get(vendors::get_by_id))
        .with_state(state)
        .layer(CorsLayer::permissive())
}
