pub mod locations;
pub mod search;
pub mod session;

use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::libraries::meeting::MeetingSession;
use crate::services::storage::LocationStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: Arc<RwLock<MeetingSession>>,
    pub store: Arc<LocationStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: Arc::new(RwLock::new(MeetingSession::new())),
            store: Arc::new(LocationStore::new()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/search", get(search::search_locations))
        .route("/api/session", get(session::get_session))
        .route("/api/session/location", post(session::set_meeting_location))
        .route("/api/locations", post(locations::save_location))
        .route("/api/locations/:id", get(locations::get_location))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "meetpoint-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
