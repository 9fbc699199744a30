use tracing::{debug, warn};

use crate::distance::matrix::DistanceMatrix;
use crate::domain::types::{Point, PointKind, Tour};

/// The implicit depot: the first pickup in caller order, or the first stop.
pub fn depot_index(points: &[Point]) -> usize {
    points
        .iter()
        .position(|p| p.kind == PointKind::Pickup)
        .unwrap_or(0)
}

/// Nearest-neighbour construction starting at `start`.
///
/// Each step moves to the closest unvisited stop; ties go to the lowest index.
/// A `start` outside the matrix falls back to stop 0.
pub fn build_initial_tour(dm: &DistanceMatrix, start: usize) -> Tour {
    let n = dm.len();
    if n == 0 {
        return Tour::default();
    }

    let start = if start < n {
        start
    } else {
        warn!("Start index {} out of range for {} stops, starting at 0", start, n);
        0
    };

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    order.push(current);

    while order.len() < n {
        let mut next: Option<(usize, f64)> = None;
        for candidate in (0..n).filter(|&c| !visited[c]) {
            let d = dm.get(current, candidate);
            // strict comparison keeps the lowest index on ties
            if next.map_or(true, |(_, best)| d < best) {
                next = Some((candidate, d));
            }
        }

        let Some((chosen, _)) = next else { break };
        visited[chosen] = true;
        order.push(chosen);
        current = chosen;
    }

    debug!("Nearest-neighbour tour: {:?}", order);
    Tour::new(order)
}
