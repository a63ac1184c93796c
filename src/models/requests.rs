use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, NamedLocation};
use super::poi::PointOfInterest;
use super::route::NormalizedRoute;

/// One forward-geocoding hit, already parsed from the provider's
/// string-typed coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeHit {
    pub place_id: i64,
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<GeocodeHit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn ok(results: Vec<GeocodeHit>) -> Self {
        Self {
            results,
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            results: vec![],
            error: Some(message),
        }
    }
}

/// Body of `POST /api/session/location`. Slots are 0 ("Location 1") and
/// 1 ("Location 2").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLocationRequest {
    pub slot: usize,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything the map UI needs to redraw after a session change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub locations: Vec<Option<NamedLocation>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint: Option<Coordinate>,

    pub pois: Vec<PointOfInterest>,
    pub skipped_points: usize,
    pub routes: Vec<NormalizedRoute>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveLocationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
