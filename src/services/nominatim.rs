use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::config::Config;
use crate::models::GeocodeHit;

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    place_id: i64,
    display_name: String,
    lat: String,
    lon: String,
}

/// Forward-geocode a free-text query into candidate locations
pub async fn search(config: &Config, query: &str) -> Result<Vec<GeocodeHit>> {
    tracing::info!("Geocoding query: {:?}", query);

    let client = reqwest::Client::builder()
        .user_agent(super::USER_AGENT)
        .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

    let response = client
        .get(format!("{}/search", config.nominatim_url))
        .query(&[("format", "json"), ("q", query)])
        .send()
        .await
        .map_err(|e| anyhow!("Geocoding request failed: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        tracing::warn!("Geocoder returned HTTP {}", status);
        return Err(anyhow!("Geocoder returned error: {}", status));
    }

    let places: Vec<NominatimPlace> = response
        .json()
        .await
        .map_err(|e| anyhow!("Failed to parse geocoder response: {}", e))?;

    let hits = places
        .into_iter()
        .filter_map(|place| match (place.lat.parse(), place.lon.parse()) {
            (Ok(latitude), Ok(longitude)) => Some(GeocodeHit {
                place_id: place.place_id,
                display_name: place.display_name,
                latitude,
                longitude,
            }),
            _ => {
                tracing::warn!(
                    "Skipping geocoder hit {} with unparsable coordinates",
                    place.place_id
                );
                None
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!("Geocoder returned {} usable hits", hits.len());
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_parsing() {
        let body = r#"[
            {"place_id": 321, "display_name": "Charlotte, NC",
             "lat": "35.2271", "lon": "-80.8431"}
        ]"#;

        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();
        assert_eq!(places[0].place_id, 321);
        assert_eq!(places[0].lat, "35.2271");
    }

    #[tokio::test]
    #[ignore] // Ignore by default as it requires network
    async fn test_search() {
        let config = Config::default();
        let result = search(&config, "Charlotte, North Carolina").await;
        assert!(result.is_ok());
    }
}
