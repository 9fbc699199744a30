//! 2-opt local search on an open path.
//!
//! Removing edges `(t[i], t[i+1])` and `(t[j], t[j+1])` and reversing the
//! stops between them changes the length by
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! Because the path does not return to its start, the last stop has no
//! outgoing edge: when `j` is the last position only the first edge is
//! replaced, giving `delta = d(t[i], t[j]) - d(t[i], t[i+1])`. The first stop
//! never moves.
//!
//! The search is first-improvement: the first move with `delta < -epsilon` is
//! applied and the scan restarts from the beginning.

use tracing::{debug, trace, warn};

use crate::distance::matrix::DistanceMatrix;
use crate::domain::types::Tour;
use crate::evaluation::fitness::dist_between;
use crate::utils::reverse_segment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptMove {
    pub i: usize,
    pub j: usize,
    pub delta: f64,
}

/// Length change of reversing `t[i+1..=j]`.
pub fn two_opt_delta(tour: &Tour, dm: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let t = tour.as_slice();
    let removed_first = dist_between(t[i], t[i + 1], dm);
    let added_first = dist_between(t[i], t[j], dm);

    if j + 1 < t.len() {
        added_first + dist_between(t[i + 1], t[j + 1], dm)
            - removed_first
            - dist_between(t[j], t[j + 1], dm)
    } else {
        added_first - removed_first
    }
}

/// First move that shortens the path by more than `epsilon`, in scan order.
pub fn find_improving_move(tour: &Tour, dm: &DistanceMatrix, epsilon: f64) -> Option<TwoOptMove> {
    let n = tour.len();
    if n < 3 {
        return None;
    }

    for i in 0..n - 2 {
        for j in (i + 2)..n {
            let delta = two_opt_delta(tour, dm, i, j);
            if delta < -epsilon {
                return Some(TwoOptMove { i, j, delta });
            }
        }
    }
    None
}

/// Apply improving 2-opt moves until none is left, or until `n²` moves.
pub fn improve(tour: Tour, dm: &DistanceMatrix, epsilon: f64) -> Tour {
    improve_counting_moves(tour, dm, epsilon).0
}

/// [`improve`], also returning how many moves were applied.
fn improve_counting_moves(mut tour: Tour, dm: &DistanceMatrix, epsilon: f64) -> (Tour, usize) {
    let n = tour.len();
    let max_moves = (n * n).max(1);

    for moves in 0..max_moves {
        match find_improving_move(&tour, dm, epsilon) {
            Some(mv) => {
                trace!("move {}: reverse {}..={} ({:.4} km)", moves, mv.i + 1, mv.j, mv.delta);
                reverse_segment(&mut tour, mv.i + 1, mv.j);
            }
            None => {
                debug!("2-opt converged after {} moves", moves);
                return (tour, moves);
            }
        }
    }

    warn!("2-opt stopped at the cap of {} moves", max_moves);
    (tour, max_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::fitness::route_length;
    use approx::assert_relative_eq;

    fn plane_matrix(coords: &[(f64, f64)]) -> DistanceMatrix {
        coords
            .iter()
            .map(|a| {
                coords
                    .iter()
                    .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                    .collect()
            })
            .collect::<Vec<Vec<f64>>>()
            .into()
    }

    #[test]
    fn delta_matches_length_difference() {
        let dm = plane_matrix(&[(0.0, 0.0), (3.0, 1.0), (1.0, 1.0), (2.0, 0.0), (4.0, 0.0)]);
        let tour = Tour::identity(5);
        for i in 0..3 {
            for j in (i + 2)..5 {
                let reversed = crate::utils::reversed_segment(&tour, i + 1, j);
                let expected = route_length(&reversed, &dm) - route_length(&tour, &dm);
                assert_relative_eq!(two_opt_delta(&tour, &dm, i, j), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn uncrosses_a_square() {
        // 0 -> 2 -> 1 -> 3 crosses itself on the unit square
        let dm = plane_matrix(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        let crossed = Tour::new(vec![0, 3, 1, 2]);
        let before = route_length(&crossed, &dm);

        let improved = improve(crossed, &dm, 1e-9);

        assert!(route_length(&improved, &dm) < before);
        assert_relative_eq!(route_length(&improved, &dm), 3.0, epsilon = 1e-12);
        assert_eq!(improved.as_slice()[0], 0);
        assert!(find_improving_move(&improved, &dm, 1e-9).is_none());
    }

    #[test]
    fn tail_reversal_on_three_stops() {
        // from 0 it is shorter to visit 2 before 1
        let dm = plane_matrix(&[(0.0, 0.0), (5.0, 0.0), (1.0, 0.0)]);
        let improved = improve(Tour::identity(3), &dm, 1e-9);
        assert_eq!(improved.into_inner(), vec![0, 2, 1]);
    }

    #[test]
    fn optimal_tour_is_left_alone() {
        let dm = plane_matrix(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(improve(Tour::identity(4), &dm, 1e-9), Tour::identity(4));
    }

    #[test]
    fn tiny_tours_are_returned_unchanged() {
        let dm = plane_matrix(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(improve(Tour::new(vec![1, 0]), &dm, 1e-9).into_inner(), vec![1, 0]);
        assert!(improve(Tour::default(), &plane_matrix(&[]), 1e-9).is_empty());
    }

    #[test]
    fn stops_at_the_move_cap() {
        // asymmetric distances: the delta formula keeps finding a "shorter"
        // order and cycles through four tours forever
        let dm: DistanceMatrix = vec![
            vec![0.0, 5.0, 4.0, 5.0],
            vec![9.0, 0.0, 8.0, 6.0],
            vec![2.0, 2.0, 0.0, 2.0],
            vec![4.0, 2.0, 9.0, 0.0],
        ]
        .into();
        assert!(find_improving_move(&Tour::identity(4), &dm, 1e-9).is_some());

        let (tour, moves) = improve_counting_moves(Tour::identity(4), &dm, 1e-9);

        assert_eq!(moves, 16);
        assert!(tour.is_permutation_of(4));
        assert_eq!(tour.as_slice()[0], 0);
        // the cycle has length four, so sixteen moves land back on the start
        assert_eq!(tour, Tour::identity(4));
        assert_eq!(improve(Tour::identity(4), &dm, 1e-9), Tour::identity(4));
    }

    #[test]
    fn counts_moves_until_convergence() {
        let dm = plane_matrix(&[(0.0, 0.0), (5.0, 0.0), (1.0, 0.0)]);
        let (tour, moves) = improve_counting_moves(Tour::identity(3), &dm, 1e-9);
        assert_eq!(tour.into_inner(), vec![0, 2, 1]);
        assert_eq!(moves, 1);
    }

    #[test]
    fn never_increases_length() {
        let dm = plane_matrix(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (3.0, 7.0),
        ]);
        let initial = Tour::new(vec![0, 4, 1, 5, 2, 3]);
        let before = route_length(&initial, &dm);
        let improved = improve(initial, &dm, 1e-9);
        assert!(improved.is_permutation_of(6));
        assert!(route_length(&improved, &dm) <= before);
    }
}
