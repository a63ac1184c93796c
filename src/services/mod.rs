pub mod nominatim;
pub mod osrm;
pub mod overpass;
pub mod storage;

/// User-Agent sent to every upstream provider, as their usage policies ask
pub const USER_AGENT: &str = concat!("meetpoint-service/", env!("CARGO_PKG_VERSION"));
