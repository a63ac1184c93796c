pub mod coordinate;
pub mod poi;
pub mod requests;
pub mod route;
pub mod saved_location;

// Re-export commonly used types
pub use coordinate::{Coordinate, InvalidCoordinateError, NamedLocation};
pub use poi::{Category, PointOfInterest, PoiTags, RawPoint};
pub use requests::{
    GeocodeHit, SaveLocationRequest, SearchResponse, SessionSnapshot, SetLocationRequest,
};
pub use route::{CoordinateOrder, NoRoutesError, NormalizedRoute, RawRoute};
pub use saved_location::SavedLocation;
