//! File adapters around the solver.
//!
//! - [`load_points`]: city coordinates (plain or TSPLIB)
//! - [`load_reference_tour`]: a known tour for comparison
//! - [`RunConfig`]: TOML run file for the command-line solver
//! - [`Report`]: final summary
//! - [`run()`]: a complete run from a [`RunConfig`]

mod points;
mod reference;
mod report;
mod run;
mod run_config;

pub use points::{load_points, parse_points};
pub use reference::{default_reference_path, load_reference_tour, parse_reference_tour};
pub use report::Report;
pub use run::run;
pub use run_config::RunConfig;
