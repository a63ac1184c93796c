use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info, warn};

use crate::libraries::aggregator;
use crate::libraries::meeting::LocationSlot;
use crate::libraries::route_normalizer;
use crate::models::{
    Coordinate, CoordinateOrder, NamedLocation, SessionSnapshot, SetLocationRequest,
};
use crate::services::{osrm, overpass};

use super::AppState;

pub async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.read().await.snapshot())
}

/// Set one of the two meeting locations.
///
/// When this completes the pair, the midpoint is derived and the POI and
/// route fetches run concurrently against it. Both results go through the
/// session's token gates, so a response from a superseded fetch is dropped
/// instead of overwriting newer state.
pub async fn set_meeting_location(
    State(state): State<AppState>,
    Json(request): Json<SetLocationRequest>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let Some(slot) = LocationSlot::from_index(request.slot) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let location = NamedLocation::new(
        request.name,
        Coordinate {
            latitude: request.latitude,
            longitude: request.longitude,
        },
    );

    // Update the pair and claim fetch tokens under one lock
    let (midpoint, endpoints, poi_token, route_token) = {
        let mut session = state.session.write().await;
        let midpoint = session.set_location(slot, location).map_err(|e| {
            debug!("Rejected location update: {}", e);
            StatusCode::BAD_REQUEST
        })?;

        let Some(midpoint) = midpoint else {
            return Ok(Json(session.snapshot()));
        };
        let Some((first, second)) = session.pair().both() else {
            return Ok(Json(session.snapshot()));
        };

        let endpoints = (first.coordinate, second.coordinate);
        (
            midpoint,
            endpoints,
            session.begin_poi_fetch(),
            session.begin_route_fetch(),
        )
    };

    info!(
        "Meeting midpoint at ({:.4}, {:.4}), fetching places and routes",
        midpoint.latitude, midpoint.longitude
    );

    // The two upstream queries are independent of each other
    let (poi_result, route_result) = tokio::join!(
        overpass::nearby_points(&state.config, &midpoint),
        osrm::fetch_routes(&state.config, &endpoints.0, &endpoints.1),
    );

    let mut session = state.session.write().await;

    match poi_result {
        Ok(raw_points) => match aggregator::aggregate(
            &midpoint,
            &raw_points,
            state.config.max_pois,
            state.config.poi_radius_km,
        ) {
            Ok(aggregation) => {
                if !session.apply_pois(poi_token, aggregation) {
                    debug!("Discarding superseded POI result");
                }
            }
            Err(e) => warn!("POI aggregation failed: {}", e),
        },
        // Degraded mode: the map simply shows no nearby places
        Err(e) => warn!("POI fetch failed: {}", e),
    }

    match route_result {
        Ok(raw_routes) => {
            let outcome = route_normalizer::normalize(&raw_routes, CoordinateOrder::LonLat);
            if !session.apply_routes(route_token, outcome) {
                debug!("Discarding superseded route result");
            }
        }
        Err(e) => warn!("Route fetch failed: {}", e),
    }

    Ok(Json(session.snapshot()))
}
