use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::config::Config;
use crate::models::{Coordinate, RawRoute};

/// OSRM route response structure
#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    duration: f64,
    distance: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON order: (longitude, latitude)
    coordinates: Vec<[f64; 2]>,
}

/// Fetch driving routes between two coordinates, alternatives included.
///
/// Routes come back in provider order (preferred route first) with GeoJSON
/// lon-lat geometry; the route normalizer turns them into canonical form.
pub async fn fetch_routes(config: &Config, from: &Coordinate, to: &Coordinate) -> Result<Vec<RawRoute>> {
    let url = format!(
        "{}/route/v1/driving/{},{};{},{}",
        config.osrm_url, from.longitude, from.latitude, to.longitude, to.latitude,
    );

    tracing::info!(
        "Querying routing provider between ({}, {}) and ({}, {})",
        from.latitude,
        from.longitude,
        to.latitude,
        to.longitude
    );

    let client = reqwest::Client::builder()
        .user_agent(super::USER_AGENT)
        .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

    let response = client
        .get(url)
        .query(&[
            ("alternatives", "true"),
            ("overview", "full"),
            ("geometries", "geojson"),
        ])
        .send()
        .await
        .map_err(|e| anyhow!("Routing request failed: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        tracing::warn!("Routing provider returned HTTP {}", status);
        return Err(anyhow!("Routing provider returned error: {}", status));
    }

    let data: OsrmResponse = response
        .json()
        .await
        .map_err(|e| anyhow!("Failed to parse routing response: {}", e))?;

    if data.code != "Ok" {
        return Err(anyhow!("Routing provider rejected the request: {}", data.code));
    }

    tracing::debug!("Routing provider returned {} route(s)", data.routes.len());

    Ok(data
        .routes
        .into_iter()
        .map(|route| RawRoute {
            coordinates: route.geometry.coordinates,
            duration_seconds: route.duration,
            distance_meters: route.distance,
        })
        .collect())
}
