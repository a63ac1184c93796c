use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::error::Error;

use crate::config::Config;
use crate::models::{Coordinate, PoiTags, RawPoint};

/// Overpass API response structure
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: u64,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: PoiTags,
}

/// Query the Overpass API for tagged nodes around a coordinate.
///
/// Returns the raw, untrusted point cloud; classification, deduplication and
/// radius enforcement happen in the aggregator.
pub async fn nearby_points(config: &Config, center: &Coordinate) -> Result<Vec<RawPoint>> {
    let radius_meters = (config.poi_radius_km * 1000.0).round() as u32;
    let query = format!(
        r#"[out:json][timeout:25];
(
  node["amenity"](around:{radius},{lat},{lon});
  node["leisure"](around:{radius},{lat},{lon});
  node["tourism"](around:{radius},{lat},{lon});
  node["shop"](around:{radius},{lat},{lon});
);
out body;"#,
        radius = radius_meters,
        lat = center.latitude,
        lon = center.longitude,
    );

    tracing::info!(
        "Querying Overpass API at ({}, {}) within {}m",
        center.latitude,
        center.longitude,
        radius_meters
    );

    let client = reqwest::Client::builder()
        .user_agent(super::USER_AGENT)
        .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

    let response = client
        .post(&config.overpass_url)
        .body(query)
        .send()
        .await
        .map_err(|e| {
            // Log full error chain for debugging
            let mut error_msg = format!("Overpass API request failed: {}", e);
            let mut source = e.source();
            while let Some(err) = source {
                error_msg.push_str(&format!("\n  Caused by: {}", err));
                source = err.source();
            }
            tracing::warn!("{}", error_msg);
            anyhow!(error_msg)
        })?;

    if !response.status().is_success() {
        let status = response.status();
        tracing::warn!("Overpass API returned HTTP {}", status);
        return Err(anyhow!("Overpass API returned error: {}", status));
    }

    let data: OverpassResponse = response
        .json()
        .await
        .map_err(|e| anyhow!("Failed to parse Overpass response: {}", e))?;

    tracing::debug!("Overpass returned {} elements", data.elements.len());

    Ok(data
        .elements
        .into_iter()
        .map(|element| RawPoint {
            id: element.id.to_string(),
            latitude: element.lat,
            longitude: element.lon,
            tags: element.tags,
        })
        .collect())
}
