use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// A route as returned by the routing provider: a bare coordinate polyline
/// plus road-network-aware duration and distance. Provider order is
/// significant (the first route is the provider's preferred one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRoute {
    pub coordinates: Vec<[f64; 2]>,
    pub duration_seconds: f64,
    pub distance_meters: f64,
}

/// Axis order of the raw coordinate pairs. GeoJSON-speaking providers emit
/// (longitude, latitude); others emit (latitude, longitude).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateOrder {
    LonLat,
    LatLon,
}

impl CoordinateOrder {
    pub fn to_coordinate(self, pair: [f64; 2]) -> Coordinate {
        match self {
            CoordinateOrder::LonLat => Coordinate {
                latitude: pair[1],
                longitude: pair[0],
            },
            CoordinateOrder::LatLon => Coordinate {
                latitude: pair[0],
                longitude: pair[1],
            },
        }
    }
}

/// A route reshaped into the canonical form the caller renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRoute {
    pub path: Vec<Coordinate>,
    pub duration_seconds: f64,
    pub distance_meters: f64,
    pub is_alternative: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("routing provider returned no routes")]
pub struct NoRoutesError;
