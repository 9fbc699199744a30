pub mod data_generator;

pub use data_generator::{generate_trip, generate_trip_with};
