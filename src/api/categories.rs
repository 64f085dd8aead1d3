// Market Directory - Category Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use super::{ApiError, AppState};
use crate::domain::{Category, CategoryPatch};

/// GET /api/v1/categories/ - List all categories
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.categories.find_all().await?;
    Ok(Json(categories))
}

/// GET /api/v1/categories/:id/ - Get one category
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .categories
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound("category"))?;

    Ok(Json(category))
}

/// POST /api/v1/categories - Create a category (store assigns the id)
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Category>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.categories.save(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/categories/:id - Replace a category unconditionally.
/// The path id overrides any id in the body; prior existence is not
/// checked, so an unknown id creates the record.
pub async fn full_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut body): Json<Category>,
) -> Result<Json<Category>, ApiError> {
    body.id = Some(id);
    let updated = state.categories.save(body).await?;
    Ok(Json(updated))
}

/// PATCH /api/v1/categories/:id - Apply only changed fields.
/// Skips the store write entirely when the overlaid body matches the
/// stored record field for field.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CategoryPatch>,
) -> Result<Json<Category>, ApiError> {
    let existing = state
        .categories
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound("category"))?;

    match existing.apply_patch(&patch) {
        Some(merged) => {
            let saved = state.categories.save(merged).await?;
            Ok(Json(saved))
        }
        None => Ok(Json(existing)),
    }
}
