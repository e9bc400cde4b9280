//! Plain-text run summary.

use std::fmt;

/// Final costs of a run, printed as a short summary.
///
/// # Examples
///
/// ```
/// use u_tempering::io::Report;
///
/// let report = Report::new("krod100.tsp", 21294.3).with_reference_cost(21294.29);
/// let text = report.to_string();
/// assert!(text.starts_with("Data(krod100.tsp)\n"));
/// assert!(text.contains("Exact solution : 21294.29"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub data_name: String,
    pub solution_cost: f64,
    pub reference_cost: Option<f64>,
}

impl Report {
    pub fn new(data_name: impl Into<String>, solution_cost: f64) -> Self {
        Self {
            data_name: data_name.into(),
            solution_cost,
            reference_cost: None,
        }
    }

    pub fn with_reference_cost(mut self, cost: f64) -> Self {
        self.reference_cost = Some(cost);
        self
    }

    /// Solution cost relative to the reference, e.g. `0.02` for 2% longer.
    pub fn gap(&self) -> Option<f64> {
        self.reference_cost
            .filter(|&r| r > 0.0)
            .map(|r| (self.solution_cost - r) / r)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data({})", self.data_name)?;
        writeln!(f, "TPSA solution  : {}", self.solution_cost)?;
        if let Some(reference) = self.reference_cost {
            writeln!(f, "Exact solution : {reference}")?;
        }
        Ok(())
    }
}
