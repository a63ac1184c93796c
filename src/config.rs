use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Base URLs of the three upstream providers
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,

    #[serde(default = "default_overpass_url")]
    pub overpass_url: String,

    #[serde(default = "default_osrm_url")]
    pub osrm_url: String,

    // Search radius around the midpoint for places of interest
    #[serde(default = "default_poi_radius_km")]
    pub poi_radius_km: f64,

    #[serde(default = "default_max_pois")]
    pub max_pois: usize,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            nominatim_url: default_nominatim_url(),
            overpass_url: default_overpass_url(),
            osrm_url: default_osrm_url(),
            poi_radius_km: default_poi_radius_km(),
            max_pois: default_max_pois(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_osrm_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_poi_radius_km() -> f64 {
    5.0
}

fn default_max_pois() -> usize {
    15
}

fn default_request_timeout_secs() -> u64 {
    15
}
