pub mod stops;

pub use stops::{
    outcome_to_json, read_points, read_points_csv, read_points_json, write_plan_csv,
    write_plan_csv_to,
};
