pub mod geo;
pub mod matrix;

pub use geo::{centroid, distance_km, haversine_km};
pub use matrix::DistanceMatrix;
