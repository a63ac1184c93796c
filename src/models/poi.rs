use serde::{Deserialize, Serialize};

/// The tags we recognize on a raw map point. The upstream vocabulary is
/// open-ended; everything outside this fixed schema is ignored so the
/// classifier's rules stay auditable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoiTags {
    pub name: Option<String>,
    pub amenity: Option<String>,
    pub leisure: Option<String>,
    pub tourism: Option<String>,
    pub shop: Option<String>,
}

impl PoiTags {
    /// Whether any category-bearing tag is present
    pub fn has_category_tag(&self) -> bool {
        self.amenity.is_some()
            || self.leisure.is_some()
            || self.tourism.is_some()
            || self.shop.is_some()
    }
}

/// An untrusted point as returned by the POI provider. Coordinates may be
/// missing entirely, names and tags may be absent or useless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPoint {
    pub id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub tags: PoiTags,
}

/// Semantic category of a point of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Restaurant,
    Cafe,
    Park,
    Shopping,
    Entertainment,
    Hotel,
    Bar,
    Museum,
    Other,
}

/// A named, categorized place near the meeting point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}
