use crate::libraries::aggregator::Aggregation;
use crate::libraries::geodesy;
use crate::models::{
    Coordinate, InvalidCoordinateError, NamedLocation, NoRoutesError, NormalizedRoute,
    PointOfInterest, SessionSnapshot,
};

/// The two ordered location slots: "Location 1" and "Location 2".
/// Replacing a slot never renumbers the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSlot {
    First,
    Second,
}

impl LocationSlot {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(LocationSlot::First),
            1 => Some(LocationSlot::Second),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            LocationSlot::First => 0,
            LocationSlot::Second => 1,
        }
    }
}

/// Zero, one, or two selected locations
#[derive(Debug, Clone, Default)]
pub struct LocationPair {
    slots: [Option<NamedLocation>; 2],
}

impl LocationPair {
    pub fn set(&mut self, slot: LocationSlot, location: NamedLocation) {
        self.slots[slot.index()] = Some(location);
    }

    pub fn get(&self, slot: LocationSlot) -> Option<&NamedLocation> {
        self.slots[slot.index()].as_ref()
    }

    /// Both locations, only when both slots are populated
    pub fn both(&self) -> Option<(&NamedLocation, &NamedLocation)> {
        match (&self.slots[0], &self.slots[1]) {
            (Some(first), Some(second)) => Some((first, second)),
            _ => None,
        }
    }
}

/// Ticket for one in-flight fetch. Tokens from the same series are
/// monotonically increasing; only the latest one is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchToken(u64);

#[derive(Debug, Default)]
struct TokenSeries {
    issued: u64,
}

impl TokenSeries {
    fn issue(&mut self) -> FetchToken {
        self.issued += 1;
        FetchToken(self.issued)
    }

    /// Make every outstanding token stale without issuing a new one
    fn invalidate(&mut self) {
        self.issued += 1;
    }

    fn is_current(&self, token: FetchToken) -> bool {
        token.0 == self.issued
    }
}

/// Session state for one meeting-spot search: the selected location pair,
/// the midpoint derived from it, and the POI/route result sets.
///
/// Results arrive from asynchronous fetches that can overlap when the user
/// changes a location before the previous fetch resolves. Each fetch carries
/// a token from its own series; a result is applied only if its token is
/// still the latest issued, so a stale response can never clobber a newer
/// one regardless of arrival order.
#[derive(Debug, Default)]
pub struct MeetingSession {
    pair: LocationPair,
    midpoint: Option<Coordinate>,
    pois: Vec<PointOfInterest>,
    skipped_points: usize,
    routes: Vec<NormalizedRoute>,
    route_error: Option<String>,
    poi_fetches: TokenSeries,
    route_fetches: TokenSeries,
}

impl MeetingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn midpoint(&self) -> Option<Coordinate> {
        self.midpoint
    }

    pub fn pair(&self) -> &LocationPair {
        &self.pair
    }

    /// Replace one slot of the pair. The midpoint is recomputed immediately:
    /// present exactly when both slots are populated, gone otherwise. Any
    /// POI/route results derived from the previous pair are cleared — they
    /// are stale the moment a location changes.
    pub fn set_location(
        &mut self,
        slot: LocationSlot,
        location: NamedLocation,
    ) -> Result<Option<Coordinate>, InvalidCoordinateError> {
        if !location.coordinate.is_valid() {
            return Err(InvalidCoordinateError {
                latitude: location.coordinate.latitude,
                longitude: location.coordinate.longitude,
            });
        }

        self.pair.set(slot, location);
        self.pois.clear();
        self.skipped_points = 0;
        self.routes.clear();
        self.route_error = None;

        // Fetches started against the previous pair must not land
        self.poi_fetches.invalidate();
        self.route_fetches.invalidate();

        self.midpoint = match self.pair.both() {
            Some((first, second)) => {
                Some(geodesy::midpoint(&first.coordinate, &second.coordinate)?)
            }
            None => None,
        };

        Ok(self.midpoint)
    }

    pub fn begin_poi_fetch(&mut self) -> FetchToken {
        self.poi_fetches.issue()
    }

    pub fn begin_route_fetch(&mut self) -> FetchToken {
        self.route_fetches.issue()
    }

    /// Apply a finished POI aggregation. Returns false (and changes nothing)
    /// when a newer POI fetch has been issued since this token.
    pub fn apply_pois(&mut self, token: FetchToken, aggregation: Aggregation) -> bool {
        if !self.poi_fetches.is_current(token) {
            return false;
        }
        self.pois = aggregation.pois;
        self.skipped_points = aggregation.skipped;
        true
    }

    /// Apply a finished route normalization, or record its failure. Stale
    /// tokens are discarded the same way as for POIs.
    pub fn apply_routes(
        &mut self,
        token: FetchToken,
        outcome: Result<Vec<NormalizedRoute>, NoRoutesError>,
    ) -> bool {
        if !self.route_fetches.is_current(token) {
            return false;
        }
        match outcome {
            Ok(routes) => {
                self.routes = routes;
                self.route_error = None;
            }
            Err(error) => {
                self.routes.clear();
                self.route_error = Some(error.to_string());
            }
        }
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            locations: vec![
                self.pair.get(LocationSlot::First).cloned(),
                self.pair.get(LocationSlot::Second).cloned(),
            ],
            midpoint: self.midpoint,
            pois: self.pois.clone(),
            skipped_points: self.skipped_points,
            routes: self.routes.clone(),
            route_error: self.route_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, latitude: f64, longitude: f64) -> NamedLocation {
        NamedLocation::new(
            name,
            Coordinate {
                latitude,
                longitude,
            },
        )
    }

    fn some_pois(count: usize) -> Aggregation {
        let pois = (0..count)
            .map(|i| PointOfInterest {
                id: i.to_string(),
                name: format!("Place {i}"),
                category: crate::models::Category::Other,
                latitude: 40.0,
                longitude: -75.0,
                distance_km: i as f64,
            })
            .collect();
        Aggregation { pois, skipped: 0 }
    }

    #[test]
    fn test_no_midpoint_until_both_slots_set() {
        let mut session = MeetingSession::new();
        let mid = session
            .set_location(LocationSlot::First, location("A", 40.7128, -74.0060))
            .unwrap();
        assert!(mid.is_none());
        assert!(session.midpoint().is_none());

        let mid = session
            .set_location(LocationSlot::Second, location("B", 34.0522, -118.2437))
            .unwrap();
        assert!(mid.is_some());
    }

    #[test]
    fn test_replacing_a_slot_recomputes_midpoint() {
        let mut session = MeetingSession::new();
        session
            .set_location(LocationSlot::First, location("A", 40.0, -75.0))
            .unwrap();
        session
            .set_location(LocationSlot::Second, location("B", 42.0, -75.0))
            .unwrap();
        let first_mid = session.midpoint().unwrap();

        session
            .set_location(LocationSlot::Second, location("C", 44.0, -75.0))
            .unwrap();
        let second_mid = session.midpoint().unwrap();

        assert!((first_mid.latitude - 41.0).abs() < 0.01);
        assert!((second_mid.latitude - 42.0).abs() < 0.01);
        // Slot order preserved across the replacement
        assert_eq!(session.pair().get(LocationSlot::First).unwrap().name, "A");
        assert_eq!(session.pair().get(LocationSlot::Second).unwrap().name, "C");
    }

    #[test]
    fn test_invalid_location_rejected() {
        let mut session = MeetingSession::new();
        assert!(session
            .set_location(LocationSlot::First, location("bad", 91.0, 0.0))
            .is_err());
        assert!(session.pair().get(LocationSlot::First).is_none());
    }

    #[test]
    fn test_stale_poi_result_discarded() {
        let mut session = MeetingSession::new();
        let stale = session.begin_poi_fetch();
        let current = session.begin_poi_fetch();

        // The older fetch resolves after the newer one
        assert!(session.apply_pois(current, some_pois(3)));
        assert!(!session.apply_pois(stale, some_pois(7)));
        assert_eq!(session.snapshot().pois.len(), 3);
    }

    #[test]
    fn test_stale_route_result_discarded() {
        let mut session = MeetingSession::new();
        let stale = session.begin_route_fetch();
        let current = session.begin_route_fetch();

        assert!(session.apply_routes(current, Err(NoRoutesError)));
        assert!(!session.apply_routes(stale, Ok(vec![])));

        let snapshot = session.snapshot();
        assert!(snapshot.routes.is_empty());
        assert!(snapshot.route_error.is_some());
    }

    #[test]
    fn test_location_change_clears_previous_results() {
        let mut session = MeetingSession::new();
        session
            .set_location(LocationSlot::First, location("A", 40.0, -75.0))
            .unwrap();
        session
            .set_location(LocationSlot::Second, location("B", 42.0, -75.0))
            .unwrap();

        let token = session.begin_poi_fetch();
        session.apply_pois(token, some_pois(5));
        assert_eq!(session.snapshot().pois.len(), 5);

        session
            .set_location(LocationSlot::Second, location("C", 44.0, -75.0))
            .unwrap();
        let snapshot = session.snapshot();
        assert!(snapshot.pois.is_empty());
        assert!(snapshot.routes.is_empty());
        assert!(snapshot.route_error.is_none());
    }

    #[test]
    fn test_location_change_invalidates_outstanding_fetches() {
        let mut session = MeetingSession::new();
        let token = session.begin_poi_fetch();

        session
            .set_location(LocationSlot::First, location("A", 40.0, -75.0))
            .unwrap();

        // The fetch was started against the previous pair
        assert!(!session.apply_pois(token, some_pois(2)));
        assert!(session.snapshot().pois.is_empty());
    }

    #[test]
    fn test_snapshot_reports_skip_count() {
        let mut session = MeetingSession::new();
        let token = session.begin_poi_fetch();
        session.apply_pois(
            token,
            Aggregation {
                pois: vec![],
                skipped: 4,
            },
        );
        assert_eq!(session.snapshot().skipped_points, 4);
    }
}
