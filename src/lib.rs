//! Route optimization for multi-stop pickup and delivery trips.
//!
//! Given the geocoded stops of one trip, the engine validates them, builds a
//! nearest-neighbour visiting order, refines it with 2-opt and reports
//! distance, time and savings over the caller's order. Distances are
//! great-circle, not road distances.

pub mod app;
pub mod config;
pub mod distance;
pub mod domain;
pub mod evaluation;
pub mod fixtures;
pub mod io;
pub mod setup;
pub mod solver;
pub mod utils;

pub use config::EngineConfig;
pub use distance::{centroid, distance_km};
pub use domain::{
    ConfigError, Coordinates, EmptyInputError, OptimizationError, OptimizationOutcome, Point,
    PointKind, RoutePlan, RouteStatistics, SavingsReport, Tour, ValidationReport,
};
pub use evaluation::{savings, statistics};
pub use setup::validate;
pub use solver::{build_initial_tour, improve, optimize, optimize_batch, optimize_with_savings};
