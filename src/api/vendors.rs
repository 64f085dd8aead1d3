// Market Directory - Vendor Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use super::{ApiError, AppState};
use crate::domain::{Vendor, VendorPatch};

/// GET /api/v1/vendors/ - List all vendors
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Vendor>>, ApiError> {
    let vendors = state.vendors.find_all().await?;
    Ok(Json(vendors))
}

/// GET /api/v1/vendors/:id/ - Get one vendor
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vendor>, ApiError> {
    let vendor = state
        .vendors
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound("vendor"))?;

    Ok(Json(vendor))
}

/// POST /api/v1/vendors - Create a vendor (store assigns the id)
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Vendor>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.vendors.save(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/vendors/:id - Replace a vendor unconditionally.
/// The path id overrides any id in the body; prior existence is not
/// checked, so an unknown id creates the record.
pub async fn full_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut body): Json<Vendor>,
) -> Result<Json<Vendor>, ApiError> {
    body.id = Some(id);
    let updated = state.vendors.save(body).await?;
    Ok(Json(updated))
}

/// PATCH /api/v1/vendors/:id - Apply only changed fields.
/// Skips the store write entirely when the overlaid body matches the
/// stored record field for field.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<VendorPatch>,
) -> Result<Json<Vendor>, ApiError> {
    let existing = state
        .vendors
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound("vendor"))?;

    match existing.apply_patch(&patch) {
        Some(merged) => {
            let saved = state.vendors.save(merged).await?;
            Ok(Json(saved))
        }
        None => Ok(Json(existing)),
    }
}
