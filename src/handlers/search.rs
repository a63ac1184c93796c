use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::error;

use crate::models::SearchResponse;
use crate::services::nominatim;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// Proxy a free-text location search to the geocoder.
///
/// Upstream failure degrades to an empty result list with the error in the
/// body; the search box is not worth a 5xx.
pub async fn search_locations(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    match nominatim::search(&state.config, &params.q).await {
        Ok(results) => Json(SearchResponse::ok(results)),
        Err(e) => {
            error!("Geocoding failed: {}", e);
            Json(SearchResponse::error(
                "Location search is unavailable right now".to_string(),
            ))
        }
    }
}
