pub mod fitness;
pub mod statistics;

pub use fitness::{find_distance, route_length};
pub use statistics::{compare, savings, statistics};
