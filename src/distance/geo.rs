use crate::config::constant::EARTH_RADIUS_KM;
use crate::domain::error::EmptyInputError;
use crate::domain::types::{Coordinates, Point};

/// Great-circle (haversine) distance in km between two coordinate pairs.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // rounding can push h slightly outside [0, 1] for antipodal pairs
    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Distance in km between two stops.
///
/// Both points must carry usable coordinates; callers filter with
/// [`Point::is_valid`] before reaching this layer.
///
/// # Panics
///
/// Panics if either point is missing coordinates or holds the `(0, 0)`
/// sentinel, in every build profile.
pub fn distance_km(a: &Point, b: &Point) -> f64 {
    let (Some(from), Some(to)) = (a.coordinates(), b.coordinates()) else {
        panic!(
            "distance_km called with unusable coordinates: {} -> {}",
            a.display_name(),
            b.display_name()
        );
    };
    haversine_km(from, to)
}

/// Arithmetic mean of the valid coordinates, used to center a map view.
pub fn centroid(points: &[Point]) -> Result<Coordinates, EmptyInputError> {
    let (sum_lat, sum_lng, count) = points
        .iter()
        .filter_map(Point::coordinates)
        .fold((0.0, 0.0, 0usize), |(lat, lng, n), c| (lat + c.lat, lng + c.lng, n + 1));

    if count == 0 {
        return Err(EmptyInputError);
    }

    Ok(Coordinates {
        lat: sum_lat / count as f64,
        lng: sum_lng / count as f64,
    })
}
