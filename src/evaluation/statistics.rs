//! Distance, time and stop figures for a visiting order, and the savings
//! of one order over another.
//!
//! Travel time is straight-line distance at the configured average speed,
//! plus a fixed service allowance per stop. Savings are clamped at zero so an
//! optimized route is never reported as worse than the caller's order.

use tracing::debug;

use super::fitness::find_distance;
use crate::config::EngineConfig;
use crate::domain::types::{Point, RouteStatistics, SavingsReport, Tour};

/// Figures for visiting `points` in `tour` order.
///
/// # Panics
///
/// Panics if the tour reaches a point without usable coordinates (see
/// [`distance_km`](crate::distance::geo::distance_km)).
pub fn statistics(tour: &Tour, points: &[Point], config: &EngineConfig) -> RouteStatistics {
    let total_distance_km = find_distance(tour, points);
    RouteStatistics {
        total_distance_km,
        estimated_minutes: estimate_minutes(total_distance_km, tour.len(), config),
        stop_count: tour.len(),
    }
}

pub fn savings(
    original: &Tour,
    optimized: &Tour,
    points: &[Point],
    config: &EngineConfig,
) -> SavingsReport {
    let before = statistics(original, points, config);
    let after = statistics(optimized, points, config);
    compare(&before, &after)
}

/// Savings of `after` over `before`, both computed on the same stops.
pub fn compare(before: &RouteStatistics, after: &RouteStatistics) -> SavingsReport {
    let distance_saved_km = (before.total_distance_km - after.total_distance_km).max(0.0);
    let percent_saved = if before.total_distance_km > 0.0 {
        (distance_saved_km / before.total_distance_km * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let minutes_saved = before.estimated_minutes.saturating_sub(after.estimated_minutes);

    debug!(
        "Saved {:.2} km ({:.1}%), {} min",
        distance_saved_km, percent_saved, minutes_saved
    );

    SavingsReport {
        distance_saved_km,
        percent_saved,
        minutes_saved,
    }
}

fn estimate_minutes(distance_km: f64, stop_count: usize, config: &EngineConfig) -> u32 {
    let driving = (distance_km / config.average_speed_kmh * 60.0).round() as u32;
    let service = config.service_minutes_per_stop.saturating_mul(stop_count as u32);
    driving.saturating_add(service)
}
