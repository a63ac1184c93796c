use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::SavedLocation;

/// In-memory saved-location store with sequential ids
pub struct LocationStore {
    locations: RwLock<HashMap<i64, SavedLocation>>,
    next_id: AtomicI64,
}

impl LocationStore {
    pub fn new() -> Self {
        Self {
            locations: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Persist a location. Coordinates are rounded to 6 decimal places
    /// before storage.
    pub async fn save(&self, name: String, latitude: f64, longitude: f64) -> SavedLocation {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let location = SavedLocation {
            id,
            name,
            latitude: round_decimals(latitude),
            longitude: round_decimals(longitude),
            created_at: Utc::now(),
        };

        let mut locations = self.locations.write().await;
        locations.insert(id, location.clone());
        location
    }

    pub async fn get(&self, id: i64) -> Option<SavedLocation> {
        let locations = self.locations.read().await;
        locations.get(&id).cloned()
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}

fn round_decimals(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
