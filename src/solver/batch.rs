use rayon::prelude::*;
use tracing::info;

use crate::config::EngineConfig;
use crate::domain::error::OptimizationError;
use crate::domain::types::{Point, RoutePlan};

use super::optimize::optimize;

/// Optimize many independent trips in parallel.
///
/// Each trip runs the single-threaded [`optimize`]; results come back in the
/// order of `trips`.
pub fn optimize_batch(
    trips: &[Vec<Point>],
    config: &EngineConfig,
) -> Vec<Result<RoutePlan, OptimizationError>> {
    let plans: Vec<Result<RoutePlan, OptimizationError>> = trips
        .par_iter()
        .map(|points| optimize(points, config))
        .collect();

    let failed = plans.iter().filter(|plan| plan.is_err()).count();
    info!("Optimized {} trips ({} failed)", trips.len(), failed);
    plans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::generate_trip_with;

    #[test]
    fn batch_matches_one_by_one_in_order() {
        let config = EngineConfig::default();
        let trips: Vec<Vec<Point>> = (0..8)
            .map(|seed| generate_trip_with(3 + seed as usize * 2, seed, 0.2))
            .collect();

        let batch = optimize_batch(&trips, &config);

        assert_eq!(batch.len(), trips.len());
        for (points, result) in trips.iter().zip(&batch) {
            assert_eq!(result, &optimize(points, &config));
        }
    }

    #[test]
    fn failed_trip_does_not_affect_the_others() {
        let config = EngineConfig::default();
        let trips = vec![
            generate_trip_with(1, 5, 0.0),
            generate_trip_with(6, 5, 0.0),
        ];

        let batch = optimize_batch(&trips, &config);

        assert!(matches!(
            batch[0],
            Err(OptimizationError::InsufficientPoints(_))
        ));
        assert!(batch[1].as_ref().unwrap().tour.is_permutation_of(6));
    }

    #[test]
    fn empty_batch() {
        assert!(optimize_batch(&[], &EngineConfig::default()).is_empty());
    }
}
