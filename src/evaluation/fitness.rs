use itertools::Itertools;

use crate::distance::geo::distance_km;
use crate::distance::matrix::DistanceMatrix;
use crate::domain::types::{Point, Tour};

/// Open-path length of a tour on a precomputed matrix (no return leg).
pub fn route_length(tour: &Tour, dm: &DistanceMatrix) -> f64 {
    tour.as_slice()
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| dist_between(from, to, dm))
        .sum()
}

/// Open-path length of a tour computed directly from the points.
pub fn find_distance(tour: &Tour, points: &[Point]) -> f64 {
    tour.as_slice()
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| distance_km(&points[from], &points[to]))
        .sum()
}

pub fn dist_between(from_loc: usize, to_loc: usize, dm: &DistanceMatrix) -> f64 {
    dm.get(from_loc, to_loc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn line_matrix() -> DistanceMatrix {
        // stops at 0, 1, 3 and 6 km along a line
        let pos = [0.0_f64, 1.0, 3.0, 6.0];
        pos.iter()
            .map(|a| pos.iter().map(|b| (a - b).abs()).collect())
            .collect::<Vec<Vec<f64>>>()
            .into()
    }

    #[test]
    fn open_path_has_no_return_leg() {
        let dm = line_matrix();
        assert_relative_eq!(route_length(&Tour::identity(4), &dm), 6.0);
        assert_relative_eq!(route_length(&Tour::new(vec![0, 3, 1, 2]), &dm), 13.0);
    }

    #[test]
    fn short_tours_have_zero_length() {
        let dm = line_matrix();
        assert_eq!(route_length(&Tour::default(), &dm), 0.0);
        assert_eq!(route_length(&Tour::new(vec![2]), &dm), 0.0);
    }

    #[test]
    fn matrix_and_direct_lengths_agree() {
        use crate::domain::types::PointKind;
        let points = vec![
            Point::new("a", PointKind::Pickup, -33.46, -70.64),
            Point::new("b", PointKind::Delivery, -33.49, -70.64),
            Point::new("c", PointKind::Delivery, -33.42, -70.60),
        ];
        let dm = DistanceMatrix::from_points(&points);
        let tour = Tour::new(vec![0, 2, 1]);
        assert_relative_eq!(route_length(&tour, &dm), find_distance(&tour, &points));
    }
}
