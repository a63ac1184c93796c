use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::libraries::classifier::{classify, display_name};
use crate::libraries::geodesy;
use crate::models::{Coordinate, InvalidCoordinateError, PointOfInterest, RawPoint};

/// Default cap on the number of places returned
pub const DEFAULT_MAX_RESULTS: usize = 15;

/// Result of turning a raw point cloud into a ranked POI list. `skipped`
/// counts the inputs that were unusable (missing or out-of-range
/// coordinates, nothing to label them with, duplicate id) — reported, never
/// an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub pois: Vec<PointOfInterest>,
    pub skipped: usize,
}

/// Build the ranked, deduplicated, categorized POI list around `origin`.
///
/// Points further than `radius_km` are dropped even if the provider returned
/// them (providers overshoot the requested search radius). The surviving
/// points are sorted ascending by distance — ties keep input order — and
/// truncated to `max_results`.
pub fn aggregate(
    origin: &Coordinate,
    raw_points: &[RawPoint],
    max_results: usize,
    radius_km: f64,
) -> Result<Aggregation, InvalidCoordinateError> {
    if !origin.is_valid() {
        return Err(InvalidCoordinateError {
            latitude: origin.latitude,
            longitude: origin.longitude,
        });
    }

    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut pois = Vec::new();
    let mut skipped = 0usize;

    for point in raw_points {
        let (Some(latitude), Some(longitude)) = (point.latitude, point.longitude) else {
            skipped += 1;
            continue;
        };

        let Ok(location) = Coordinate::new(latitude, longitude) else {
            skipped += 1;
            continue;
        };

        // No name tag and no category-bearing tag: nothing useful to show
        let Some(name) = display_name(&point.tags) else {
            skipped += 1;
            continue;
        };

        if !seen_ids.insert(point.id.as_str()) {
            skipped += 1;
            continue;
        }

        let distance_km = geodesy::distance_km(origin, &location)?;
        if distance_km > radius_km {
            debug!(
                "Dropping {} at {:.1}km, outside the {:.1}km radius",
                point.id, distance_km, radius_km
            );
            continue;
        }

        pois.push(PointOfInterest {
            id: point.id.clone(),
            name,
            category: classify(&point.tags),
            latitude,
            longitude,
            distance_km,
        });
    }

    // Stable sort: equidistant points keep their input order
    pois.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
    pois.truncate(max_results);

    Ok(Aggregation { pois, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PoiTags};

    const ORIGIN: Coordinate = Coordinate {
        latitude: 40.0,
        longitude: -75.0,
    };

    fn named_point(id: &str, name: &str, latitude: f64, longitude: f64) -> RawPoint {
        RawPoint {
            id: id.to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            tags: PoiTags {
                name: Some(name.to_string()),
                amenity: Some("restaurant".to_string()),
                ..PoiTags::default()
            },
        }
    }

    #[test]
    fn test_sorted_ascending_and_truncated() {
        let points = vec![
            named_point("far", "Far", 40.03, -75.0),
            named_point("near", "Near", 40.001, -75.0),
            named_point("mid", "Mid", 40.01, -75.0),
        ];

        let result = aggregate(&ORIGIN, &points, 2, 5.0).unwrap();
        assert_eq!(result.skipped, 0);
        assert_eq!(result.pois.len(), 2);
        assert_eq!(result.pois[0].id, "near");
        assert_eq!(result.pois[1].id, "mid");
        assert!(result.pois[0].distance_km <= result.pois[1].distance_km);
    }

    #[test]
    fn test_duplicate_ids_keep_first_occurrence() {
        let points = vec![
            named_point("1", "First", 40.001, -75.0),
            named_point("1", "Second", 40.002, -75.0),
        ];

        let result = aggregate(&ORIGIN, &points, DEFAULT_MAX_RESULTS, 5.0).unwrap();
        assert_eq!(result.pois.len(), 1);
        assert_eq!(result.pois[0].name, "First");
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_unlabelable_point_skipped_not_fatal() {
        let unusable = RawPoint {
            id: "ghost".to_string(),
            latitude: Some(40.001),
            longitude: Some(-75.0),
            tags: PoiTags::default(),
        };
        let points = vec![unusable, named_point("ok", "Kept", 40.002, -75.0)];

        let result = aggregate(&ORIGIN, &points, DEFAULT_MAX_RESULTS, 5.0).unwrap();
        assert_eq!(result.pois.len(), 1);
        assert_eq!(result.pois[0].id, "ok");
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_missing_and_invalid_coordinates_skipped() {
        let mut missing = named_point("missing", "Missing", 0.0, 0.0);
        missing.latitude = None;
        let broken = named_point("broken", "Broken", 95.0, -75.0);
        let points = vec![missing, broken, named_point("ok", "Kept", 40.001, -75.0)];

        let result = aggregate(&ORIGIN, &points, DEFAULT_MAX_RESULTS, 5.0).unwrap();
        assert_eq!(result.pois.len(), 1);
        assert_eq!(result.skipped, 2);
    }

    #[test]
    fn test_points_outside_radius_filtered() {
        // ~11km north of origin; the provider was asked for 5km
        let points = vec![
            named_point("outside", "Outside", 40.1, -75.0),
            named_point("inside", "Inside", 40.001, -75.0),
        ];

        let result = aggregate(&ORIGIN, &points, DEFAULT_MAX_RESULTS, 5.0).unwrap();
        assert_eq!(result.pois.len(), 1);
        assert_eq!(result.pois[0].id, "inside");
        // Overshoot is valid data out of range, not an unusable skip
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_unclassifiable_point_still_kept_as_other() {
        let point = RawPoint {
            id: "odd".to_string(),
            latitude: Some(40.001),
            longitude: Some(-75.0),
            tags: PoiTags {
                name: Some("Oddity".to_string()),
                ..PoiTags::default()
            },
        };

        let result = aggregate(&ORIGIN, &[point], DEFAULT_MAX_RESULTS, 5.0).unwrap();
        assert_eq!(result.pois[0].category, Category::Other);
    }

    #[test]
    fn test_invalid_origin_fails_fast() {
        let origin = Coordinate {
            latitude: -91.0,
            longitude: 0.0,
        };
        assert!(aggregate(&origin, &[], DEFAULT_MAX_RESULTS, 5.0).is_err());
    }

    #[test]
    fn test_idempotent_over_identical_input() {
        let points = vec![
            named_point("a", "A", 40.01, -75.0),
            named_point("b", "B", 40.001, -75.0),
        ];

        let first = aggregate(&ORIGIN, &points, DEFAULT_MAX_RESULTS, 5.0).unwrap();
        let second = aggregate(&ORIGIN, &points, DEFAULT_MAX_RESULTS, 5.0).unwrap();
        assert_eq!(first, second);
    }
}
