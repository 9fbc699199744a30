use crate::domain::types::Tour;

/// Reverse the stops at positions `from..=to` in place.
pub fn reverse_segment(tour: &mut Tour, from: usize, to: usize) {
    tour.as_mut_slice()[from..=to].reverse();
}

/// Copy of `tour` with the segment `from..=to` reversed.
pub fn reversed_segment(tour: &Tour, from: usize, to: usize) -> Tour {
    let mut new_tour = tour.to_owned();
    reverse_segment(&mut new_tour, from, to);
    new_tour
}
