mod check;
mod context;
mod hotspots;

pub use check::{run_check, run_check_impl};
pub use hotspots::{run_hotspots, run_hotspots_impl};
