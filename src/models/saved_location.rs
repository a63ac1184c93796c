use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A location the user chose to keep for later. Coordinates are stored at
/// fixed 6-decimal precision (about 0.1m), matching what the provider
/// actually resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}
