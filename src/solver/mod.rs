pub mod batch;
pub mod construction;
pub mod optimize;
pub mod two_opt;

pub use batch::optimize_batch;
pub use construction::{build_initial_tour, depot_index};
pub use optimize::{optimize, optimize_with_savings, solve};
pub use two_opt::{find_improving_move, improve, two_opt_delta, TwoOptMove};
