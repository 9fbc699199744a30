use std::env;
use std::str::FromStr;

use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::error::ConfigError;

pub mod constant {
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;
    pub const DEFAULT_SERVICE_MINUTES_PER_STOP: u32 = 5;
    pub const DEFAULT_MAX_STOPS: usize = 250;
    pub const TWO_OPT_EPSILON: f64 = 1e-9;
    pub const MIN_USABLE_POINTS: usize = 2;

    pub(crate) const DEMO_STOP_COUNT: usize = 24;
    pub(crate) const SEED: u64 = 64;
    pub(crate) const SENTINEL_SHARE: f64 = 0.1;
    // Santiago, used as map fallback and demo trip center
    pub const DEMO_CENTER: (f64, f64) = (-33.4489, -70.6693);
    pub(crate) const OUTPUT_CSV_PATH: &str = "optimized_route.csv";
}

pub const ENV_AVERAGE_SPEED: &str = "ROUTE_AVERAGE_SPEED_KMH";
pub const ENV_SERVICE_MINUTES: &str = "ROUTE_SERVICE_MINUTES_PER_STOP";
pub const ENV_MAX_STOPS: &str = "ROUTE_MAX_STOPS";
pub const ENV_EPSILON: &str = "ROUTE_TWO_OPT_EPSILON";

/// Tunable parameters of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub average_speed_kmh: f64,
    pub service_minutes_per_stop: u32,
    pub max_stops: usize,
    pub epsilon: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: constant::DEFAULT_AVERAGE_SPEED_KMH,
            service_minutes_per_stop: constant::DEFAULT_SERVICE_MINUTES_PER_STOP,
            max_stops: constant::DEFAULT_MAX_STOPS,
            epsilon: constant::TWO_OPT_EPSILON,
        }
    }
}

impl EngineConfig {
    /// Load `.env` and override defaults from the `ROUTE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(speed) = parse_var::<f64, _>(&lookup, ENV_AVERAGE_SPEED)? {
            config.average_speed_kmh = speed;
        }
        if let Some(minutes) = parse_var::<u32, _>(&lookup, ENV_SERVICE_MINUTES)? {
            config.service_minutes_per_stop = minutes;
        }
        if let Some(max_stops) = parse_var::<usize, _>(&lookup, ENV_MAX_STOPS)? {
            config.max_stops = max_stops;
        }
        if let Some(epsilon) = parse_var::<f64, _>(&lookup, ENV_EPSILON)? {
            config.epsilon = epsilon;
        }

        config.validate()?;
        info!(
            "Engine config: {:.1} km/h, {} min/stop, max {} stops",
            config.average_speed_kmh, config.service_minutes_per_stop, config.max_stops
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(ConfigError::OutOfRange {
                key: ENV_AVERAGE_SPEED,
            });
        }
        if self.max_stops < constant::MIN_USABLE_POINTS {
            return Err(ConfigError::OutOfRange { key: ENV_MAX_STOPS });
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::OutOfRange { key: ENV_EPSILON });
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => {
            let value = raw.trim();
            debug!("{} = {}", key, value);
            value
                .parse::<T>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    key,
                    value: value.to_string(),
                })
        }
    }
}
