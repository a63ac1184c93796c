use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::models::{Coordinate, SaveLocationRequest, SavedLocation};

use super::AppState;

pub async fn save_location(
    State(state): State<AppState>,
    Json(request): Json<SaveLocationRequest>,
) -> Result<Json<SavedLocation>, StatusCode> {
    if request.name.trim().is_empty()
        || Coordinate::new(request.latitude, request.longitude).is_err()
    {
        return Err(StatusCode::BAD_REQUEST);
    }

    let saved = state
        .store
        .save(request.name, request.latitude, request.longitude)
        .await;
    info!("Saved location {} ({})", saved.id, saved.name);

    Ok(Json(saved))
}

pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SavedLocation>, StatusCode> {
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
