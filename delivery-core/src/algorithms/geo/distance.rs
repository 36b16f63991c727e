#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geo/distance_test.rs"]
mod distance_test;

use crate::models::Coordinate;
use crate::utils::Float;

/// A mean Earth radius in meters.
pub const EARTH_RADIUS: Float = 6_371_000.;

/// Gets great-circle distance in meters between two points using haversine formula.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Float {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.).sin().powi(2);

    // rounding may push `h` slightly above one for antipodal points
    2. * EARTH_RADIUS * h.clamp(0., 1.).sqrt().asin()
}

/// Gets great-circle distance in kilometers.
#[inline]
pub fn haversine_distance_km(a: &Coordinate, b: &Coordinate) -> Float {
    haversine_distance(a, b) / 1000.
}
