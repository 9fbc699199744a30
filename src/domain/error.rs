use thiserror::Error;

use crate::domain::types::ValidationReport;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizationError {
    #[error("not enough valid locations to optimize: {}", .0.summary)]
    InsufficientPoints(ValidationReport),
    #[error("{count} stops exceed the limit of {max} per trip")]
    TooManyPoints { count: usize, max: usize },
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Raised by `centroid` when no point has usable coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compute a center without valid coordinates")]
pub struct EmptyInputError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{key} is out of range")]
    OutOfRange { key: &'static str },
}
