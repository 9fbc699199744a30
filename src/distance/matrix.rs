use tracing::debug;

use super::geo::distance_km;
use crate::domain::types::Point;

/// Symmetric great-circle distance matrix over a set of valid points.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Create the matrix from points that have already passed validation.
    pub fn from_points(points: &[Point]) -> Self {
        debug!("Creating distance matrix for {} locations", points.len());

        let rows = points
            .iter()
            .enumerate()
            .map(|(i, from)| {
                points
                    .iter()
                    .enumerate()
                    .map(|(j, to)| if i == j { 0.0 } else { distance_km(from, to) })
                    .collect::<Vec<f64>>()
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }
}

impl From<Vec<Vec<f64>>> for DistanceMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }
}

// Print distance matrix for debugging
pub fn print_dist_matrix(dm: &DistanceMatrix) {
    debug!("Distance matrix:");
    for row in &dm.rows {
        debug!("{:?}", row);
    }
}
