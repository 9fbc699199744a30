use tracing::{debug, info, span, Level};

use crate::config::EngineConfig;
use crate::domain::error::OptimizationError;
use crate::domain::types::{OptimizationOutcome, Point, RoutePlan, Tour};
use crate::evaluation::fitness::route_length;
use crate::evaluation::statistics::{compare, statistics};
use crate::setup::init::{setup, ProblemInstance};

use super::construction::{build_initial_tour, depot_index};
use super::two_opt::improve;

/// Compute a short visiting order for one trip.
///
/// Invalid stops are left out entirely: the returned tour indexes the valid
/// subset, and `RoutePlan::original_indices` maps it back to `points`.
pub fn optimize(points: &[Point], config: &EngineConfig) -> Result<RoutePlan, OptimizationError> {
    let (_, plan) = run(points, config)?;
    Ok(plan)
}

/// Like [`optimize`], and also compares the result with the caller's order.
pub fn optimize_with_savings(
    points: &[Point],
    config: &EngineConfig,
) -> Result<OptimizationOutcome, OptimizationError> {
    let (instance, plan) = run(points, config)?;

    let baseline = statistics(&Tour::identity(instance.len()), &instance.points, config);
    let savings = compare(&baseline, &plan.statistics);
    info!(
        "Optimized route saves {:.2} km ({:.1}%) over the original order",
        savings.distance_saved_km, savings.percent_saved
    );

    Ok(OptimizationOutcome {
        plan,
        baseline,
        savings,
    })
}

fn run(
    points: &[Point],
    config: &EngineConfig,
) -> Result<(ProblemInstance, RoutePlan), OptimizationError> {
    let instance = {
        let span = span!(Level::DEBUG, "validate", locations = points.len());
        let _guard = span.enter();
        setup(points, config)?
    };

    let tour = solve(&instance, config);

    let statistics = {
        let span = span!(Level::DEBUG, "analyze");
        let _guard = span.enter();
        statistics(&tour, &instance.points, config)
    };
    info!(
        "Route over {} stops: {:.2} km, ~{} min",
        statistics.stop_count, statistics.total_distance_km, statistics.estimated_minutes
    );

    let plan = RoutePlan {
        tour,
        original_indices: instance.original_indices.clone(),
        statistics,
    };
    Ok((instance, plan))
}

/// Nearest-neighbour construction followed by 2-opt.
pub fn solve(instance: &ProblemInstance, config: &EngineConfig) -> Tour {
    let dm = &instance.distance_matrix;

    let initial = {
        let span = span!(Level::DEBUG, "construct");
        let _guard = span.enter();
        build_initial_tour(dm, depot_index(&instance.points))
    };
    debug!("Initial length: {:.3} km", route_length(&initial, dm));

    let improved = {
        let span = span!(Level::DEBUG, "improve");
        let _guard = span.enter();
        improve(initial, dm, config.epsilon)
    };
    debug!("Improved length: {:.3} km", route_length(&improved, dm));

    improved
}
