//! Parallel tempering configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the parallel tempering solver.
///
/// Every search parameter is explicit; there is no `Default`. The
/// `replicas` field is the replica count and also the number of workers
/// launched per iteration.
///
/// # Examples
///
/// ```
/// use u_tempering::pt::PtConfig;
///
/// let config = PtConfig::new(0.1, 10.0, 4, 5, 20).with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(PtConfig::new(0.1, 10.0, 1, 5, 20).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PtConfig {
    /// Temperature of the coldest (last) slot.
    pub min_temperature: f64,

    /// Temperature of the hottest (first) slot.
    pub max_temperature: f64,

    /// Number of replicas. Must be at least 2.
    #[serde(alias = "thread")]
    pub replicas: usize,

    /// Full 2-opt passes each replica performs per iteration.
    pub period: usize,

    /// Number of local-search/exchange cycles. Zero returns the initial tour.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PtConfig {
    pub fn new(
        min_temperature: f64,
        max_temperature: f64,
        replicas: usize,
        period: usize,
        max_iterations: usize,
    ) -> Self {
        Self {
            min_temperature,
            max_temperature,
            replicas,
            period,
            max_iterations,
            seed: None,
        }
    }

    pub fn with_temperatures(mut self, min: f64, max: f64) -> Self {
        self.min_temperature = min;
        self.max_temperature = max;
        self
    }

    pub fn with_replicas(mut self, n: usize) -> Self {
        self.replicas = n;
        self
    }

    pub fn with_period(mut self, n: usize) -> Self {
        self.period = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.replicas < 2 {
            return Err(ConfigError::TooFewReplicas(self.replicas));
        }
        if self.period < 1 {
            return Err(ConfigError::ZeroPeriod);
        }
        for t in [self.min_temperature, self.max_temperature] {
            if !t.is_finite() || t < 0.0 {
                return Err(ConfigError::InvalidTemperature(t));
            }
        }
        if self.max_temperature < self.min_temperature {
            return Err(ConfigError::InvertedTemperatureRange {
                min: self.min_temperature,
                max: self.max_temperature,
            });
        }
        Ok(())
    }
}
