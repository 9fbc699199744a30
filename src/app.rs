use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use dotenv::dotenv;
use tracing::{info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{DEMO_CENTER, DEMO_STOP_COUNT, OUTPUT_CSV_PATH, SEED};
use crate::config::EngineConfig;
use crate::distance::geo::centroid;
use crate::domain::error::OptimizationError;
use crate::domain::types::{Coordinates, OptimizationOutcome, Point};
use crate::fixtures::data_generator::generate_trip;
use crate::io::{outcome_to_json, read_points, write_plan_csv};

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .pretty(),
        )
        .try_init()?;
    Ok(())
}

/// Stops from the file given on the command line, or a generated demo trip.
fn load_stops(path: Option<PathBuf>) -> Result<Vec<Point>, Box<dyn Error>> {
    match path {
        Some(path) => {
            info!("Reading stops from {}", path.display());
            read_points(&path)
        }
        None => {
            info!("No stop file given, generating a demo trip");
            Ok(generate_trip(DEMO_STOP_COUNT, SEED))
        }
    }
}

/// Center for the map view, falling back to the demo center.
fn map_center(points: &[Point]) -> Coordinates {
    centroid(points).unwrap_or_else(|err| {
        warn!("{}; using default map center", err);
        Coordinates {
            lat: DEMO_CENTER.0,
            lng: DEMO_CENTER.1,
        }
    })
}

fn report(outcome: &OptimizationOutcome, points: &[Point]) {
    let plan = &outcome.plan;
    info!(
        "Original order: {:.2} km, ~{} min",
        outcome.baseline.total_distance_km, outcome.baseline.estimated_minutes
    );
    info!(
        "Optimized order: {:.2} km, ~{} min over {} stops",
        plan.statistics.total_distance_km,
        plan.statistics.estimated_minutes,
        plan.statistics.stop_count
    );
    info!(
        "Savings: {:.2} km ({:.1}%), {} min",
        outcome.savings.distance_saved_km,
        outcome.savings.percent_saved,
        outcome.savings.minutes_saved
    );

    let sequence: Vec<&str> = plan
        .ordered_original_indices()
        .into_iter()
        .map(|idx| points[idx].display_name())
        .collect();
    info!("Sequence: {}", sequence.join(" -> "));
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;

    let config = EngineConfig::from_env()?;
    let points = load_stops(env::args_os().nth(1).map(PathBuf::from))?;

    let center = map_center(&points);
    info!("Map center: ({:.5}, {:.5})", center.lat, center.lng);

    let outcome = {
        let span = span!(Level::INFO, "optimize", stops = points.len());
        let _guard = span.enter();
        match crate::solver::optimize_with_savings(&points, &config) {
            Ok(outcome) => outcome,
            Err(OptimizationError::InsufficientPoints(validation)) => {
                for warning in &validation.warnings {
                    warn!("{}", warning);
                }
                return Err(OptimizationError::InsufficientPoints(validation).into());
            }
            Err(err) => return Err(err.into()),
        }
    };

    report(&outcome, &points);
    write_plan_csv(Path::new(OUTPUT_CSV_PATH), &outcome.plan, &points)?;
    println!("{}", outcome_to_json(&outcome)?);

    Ok(())
}
