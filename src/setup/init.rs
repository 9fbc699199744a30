use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::distance::matrix::{print_dist_matrix, DistanceMatrix};
use crate::domain::error::OptimizationError;
use crate::domain::types::Point;

use super::validator::validate;

/// The valid subset of one trip, ready for the solver.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    pub points: Vec<Point>,
    pub original_indices: Vec<usize>,
    pub distance_matrix: DistanceMatrix,
}

impl ProblemInstance {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Validate the caller's stops, drop the invalid ones and build the distance matrix.
pub fn setup(points: &[Point], config: &EngineConfig) -> Result<ProblemInstance, OptimizationError> {
    info!("Starting setup with {} locations", points.len());
    config.validate()?;

    let report = validate(points);
    if !report.usable {
        warn!("Cannot optimize: {}", report.summary);
        return Err(OptimizationError::InsufficientPoints(report));
    }

    let (original_indices, valid_points): (Vec<usize>, Vec<Point>) = points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_valid())
        .map(|(idx, p)| (idx, p.clone()))
        .unzip();
    debug!("Valid location indices: {:?}", original_indices);

    if valid_points.len() > config.max_stops {
        warn!(
            "Trip has {} valid stops, limit is {}",
            valid_points.len(),
            config.max_stops
        );
        return Err(OptimizationError::TooManyPoints {
            count: valid_points.len(),
            max: config.max_stops,
        });
    }

    let distance_matrix = DistanceMatrix::from_points(&valid_points);
    print_dist_matrix(&distance_matrix);

    info!("Setup completed successfully");
    Ok(ProblemInstance {
        points: valid_points,
        original_indices,
        distance_matrix,
    })
}
