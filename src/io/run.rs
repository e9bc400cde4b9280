//! End-to-end run: load inputs, solve, summarize.

use tracing::{info, warn};

use super::points::load_points;
use super::reference::load_reference_tour;
use super::report::Report;
use super::run_config::RunConfig;
use crate::error::Result;
use crate::pt::PtState;

/// Executes a complete run described by `config`.
///
/// Point-file and solver-configuration errors abort before any worker
/// starts. A missing or malformed reference tour is logged as a warning and
/// the report is produced without a reference cost.
pub fn run(config: &RunConfig) -> Result<Report> {
    let points = load_points(&config.data)?;
    let mut state = PtState::new(&points, &config.solver)?;

    let reference_path = config.reference_path();
    let reference_cost = match load_reference_tour(&reference_path, points.len()) {
        Ok(tour) => Some(state.matrix().tour_cost(&tour)),
        Err(e) => {
            warn!(path = %reference_path.display(), error = %e, "reference tour unavailable");
            None
        }
    };

    state.run();
    let result = state.into_result();

    let mut report = Report::new(config.data_name(), result.cost);
    if let Some(cost) = reference_cost {
        report = report.with_reference_cost(cost);
    }
    if let Some(gap) = report.gap() {
        info!(gap_percent = gap * 100.0, "compared with reference tour");
    }
    Ok(report)
}
