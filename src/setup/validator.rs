use tracing::{debug, warn};

use crate::config::constant::MIN_USABLE_POINTS;
use crate::domain::types::{Point, ValidationReport};

/// Classify a trip's stops as usable or not for optimization.
///
/// A stop is invalid when a coordinate is missing or not finite, or when it
/// carries the `(0, 0)` sentinel left by a failed geocode. The trip is usable
/// once at least two valid stops remain. Warnings follow input order.
pub fn validate(points: &[Point]) -> ValidationReport {
    let warnings: Vec<String> = points
        .iter()
        .filter(|p| !p.is_valid())
        .map(|p| format!("{} no tiene coordenadas válidas", p.display_name()))
        .collect();

    let invalid_count = warnings.len();
    let valid_count = points.len() - invalid_count;
    let usable = valid_count >= MIN_USABLE_POINTS;

    let summary = if usable {
        format!("{} ubicaciones listas para optimizar", valid_count)
    } else {
        format!(
            "faltan coordenadas válidas: {} de {} ubicaciones utilizables",
            valid_count,
            points.len()
        )
    };

    if invalid_count > 0 {
        warn!("{} of {} locations lack coordinates", invalid_count, points.len());
    }
    debug!("Validation: usable = {}, {}", usable, summary);

    ValidationReport {
        usable,
        invalid_count,
        summary,
        warnings,
    }
}
