use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::constant::{DEMO_CENTER, SENTINEL_SHARE};
use crate::domain::types::{Point, PointKind};

// roughly 10 km around the center
const SPREAD_DEGREES: f64 = 0.09;

/// Generates a deterministic synthetic trip around `DEMO_CENTER`.
///
/// The first stop is always a pickup with coordinates (the depot); the rest
/// alternate deliveries and pickups, and about `SENTINEL_SHARE` of them carry
/// the `(0, 0)` sentinel of a failed geocode.
pub fn generate_trip(count: usize, seed: u64) -> Vec<Point> {
    generate_trip_with(count, seed, SENTINEL_SHARE)
}

/// Same as [`generate_trip`] with an explicit share of sentinel stops.
///
/// The share is clamped to `[0, 1]`; NaN counts as no sentinels.
pub fn generate_trip_with(count: usize, seed: u64, sentinel_share: f64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let sentinel_share = if sentinel_share.is_nan() {
        0.0
    } else {
        sentinel_share.clamp(0.0, 1.0)
    };
    let (center_lat, center_lng) = DEMO_CENTER;

    let points: Vec<Point> = (0..count)
        .map(|idx| {
            let kind = if idx % 2 == 0 {
                PointKind::Pickup
            } else {
                PointKind::Delivery
            };
            let prefix = match kind {
                PointKind::Pickup => "Laboratorio",
                PointKind::Delivery => "Farmacia",
            };

            let lat = center_lat + rng.gen_range(-SPREAD_DEGREES..SPREAD_DEGREES);
            let lng = center_lng + rng.gen_range(-SPREAD_DEGREES..SPREAD_DEGREES);
            let lost = idx > 0 && rng.gen_bool(sentinel_share);
            let (lat, lng) = if lost { (0.0, 0.0) } else { (lat, lng) };

            Point::new(format!("stop-{idx}"), kind, lat, lng)
                .with_label(format!("{prefix} {idx}"))
                .with_address(format!("Calle {} #{}", idx + 1, 100 + idx * 7))
        })
        .collect();

    let lost = points.iter().filter(|p| !p.is_valid()).count();
    info!("Generated trip with {} stops ({} without coordinates)", count, lost);
    points
}
