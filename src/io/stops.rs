use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Writer};
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::types::{OptimizationOutcome, Point, PointKind, RoutePlan};

/// One line of the optimized sequence file.
#[derive(Debug, Serialize)]
struct PlanRecord<'a> {
    position: usize,
    id: &'a str,
    kind: PointKind,
    label: &'a str,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Reads stops from a `.json` array or a headed CSV, picked by extension.
pub fn read_points(path: &Path) -> Result<Vec<Point>, Box<dyn Error>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            read_points_json(BufReader::new(File::open(path)?))
        }
        _ => read_points_csv(File::open(path)?),
    }
}

/// Reads stops from CSV with an `id,kind,label,address,latitude,longitude` header.
/// Empty coordinate cells become missing coordinates.
pub fn read_points_csv<R: Read>(source: R) -> Result<Vec<Point>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut points = Vec::new();
    for row in reader.deserialize() {
        let point: Point = row?;
        points.push(point);
    }

    info!("Loaded {} stops from CSV", points.len());
    Ok(points)
}

pub fn read_points_json<R: Read>(source: R) -> Result<Vec<Point>, Box<dyn Error>> {
    let points: Vec<Point> = serde_json::from_reader(source)?;
    info!("Loaded {} stops from JSON", points.len());
    Ok(points)
}

/// Writes the optimized sequence; `points` is the caller's full stop list.
pub fn write_plan_csv(path: &Path, plan: &RoutePlan, points: &[Point]) -> Result<(), Box<dyn Error>> {
    write_plan_csv_to(File::create(path)?, plan, points)?;
    info!("Wrote optimized sequence to {}", path.display());
    Ok(())
}

pub fn write_plan_csv_to<W: Write>(
    sink: W,
    plan: &RoutePlan,
    points: &[Point],
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_writer(sink);

    for (position, idx) in plan.ordered_original_indices().into_iter().enumerate() {
        let point = &points[idx];
        wtr.serialize(PlanRecord {
            position: position + 1,
            id: &point.id,
            kind: point.kind,
            label: &point.label,
            latitude: point.latitude,
            longitude: point.longitude,
        })?;
    }

    wtr.flush()?;
    debug!("Serialized {} stops", plan.tour.len());
    Ok(())
}

pub fn outcome_to_json(outcome: &OptimizationOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{RouteStatistics, Tour};

    const STOPS_CSV: &str = "\
id,kind,label,address,latitude,longitude
lab,pickup,Laboratorio Norte,Av. Norte 100,-33.46,-70.64
f1,delivery,Farmacia Uno,Calle 1,,
f2,delivery,Farmacia Dos,Calle 2,-33.42,-70.60
";

    #[test]
    fn reads_csv_with_missing_coordinates() {
        let points = read_points_csv(STOPS_CSV.as_bytes()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].kind, PointKind::Pickup);
        assert_eq!(points[0].label, "Laboratorio Norte");
        assert_eq!(points[1].latitude, None);
        assert!(!points[1].is_valid());
        assert_eq!(points[2].longitude, Some(-70.60));
    }

    #[test]
    fn rejects_unknown_kind() {
        let csv = "id,kind,label,address,latitude,longitude\nx,warehouse,,,1.0,1.0\n";
        assert!(read_points_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn reads_json_array() {
        let json = r#"[
            {"id": "lab", "kind": "pickup", "latitude": -33.46, "longitude": -70.64},
            {"id": "f1", "kind": "delivery", "latitude": 0.0, "longitude": 0.0, "label": "Farmacia"}
        ]"#;
        let points = read_points_json(json.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].label, "Farmacia");
        assert!(!points[1].is_valid());
    }

    #[test]
    fn writes_sequence_in_tour_order() {
        let points = read_points_csv(STOPS_CSV.as_bytes()).unwrap();
        let plan = RoutePlan {
            tour: Tour::new(vec![1, 0]),
            original_indices: vec![0, 2],
            statistics: RouteStatistics {
                total_distance_km: 5.6,
                estimated_minutes: 18,
                stop_count: 2,
            },
        };

        let mut out = Vec::new();
        write_plan_csv_to(&mut out, &plan, &points).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "position,id,kind,label,latitude,longitude");
        assert_eq!(lines[1], "1,f2,delivery,Farmacia Dos,-33.42,-70.6");
        assert_eq!(lines[2], "2,lab,pickup,Laboratorio Norte,-33.46,-70.64");
    }
}
