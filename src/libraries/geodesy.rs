use geo::{HaversineDistance, Point};

use crate::models::{Coordinate, InvalidCoordinateError};

/// Geographic midpoint along the great-circle path between two coordinates.
///
/// This is not the arithmetic average of latitude/longitude, which drifts
/// away from the true midpoint outside the equator and breaks across the
/// antimeridian.
pub fn midpoint(a: &Coordinate, b: &Coordinate) -> Result<Coordinate, InvalidCoordinateError> {
    check_range(a)?;
    check_range(b)?;

    let phi_a = a.latitude.to_radians();
    let phi_b = b.latitude.to_radians();
    let lambda_a = a.longitude.to_radians();
    let delta_lambda = b.longitude.to_radians() - lambda_a;

    let bx = phi_b.cos() * delta_lambda.cos();
    let by = phi_b.cos() * delta_lambda.sin();

    let phi_m = (phi_a.sin() + phi_b.sin())
        .atan2(((phi_a.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lambda_m = lambda_a + by.atan2(phi_a.cos() + bx);

    Ok(Coordinate {
        latitude: phi_m.to_degrees(),
        longitude: normalize_longitude(lambda_m.to_degrees()),
    })
}

/// Haversine great-circle distance between two coordinates in kilometres
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> Result<f64, InvalidCoordinateError> {
    check_range(a)?;
    check_range(b)?;

    let p1 = Point::new(a.longitude, a.latitude);
    let p2 = Point::new(b.longitude, b.latitude);

    Ok(p1.haversine_distance(&p2) / 1000.0)
}

fn check_range(coordinate: &Coordinate) -> Result<(), InvalidCoordinateError> {
    if coordinate.is_valid() {
        Ok(())
    } else {
        Err(InvalidCoordinateError {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        })
    }
}

/// Wrap an out-of-range longitude back into [-180, 180]. In-range values
/// (including exactly 180) pass through untouched.
fn normalize_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 540.0).rem_euclid(360.0) - 180.0
    }
}
