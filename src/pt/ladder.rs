//! Temperature ladder.

use crate::error::ConfigError;

/// Fixed temperatures, one per replica slot.
///
/// Slot 0 is the hottest (`max`), the last slot the coldest (`min`), with
/// linear spacing in between.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureLadder {
    temperatures: Vec<f64>,
}

impl TemperatureLadder {
    /// Builds a linearly spaced ladder of `slots` temperatures.
    ///
    /// # Errors
    /// Returns [`ConfigError::TooFewReplicas`] when `slots < 2`, since the
    /// spacing `(max - min) / (slots - 1)` is undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tempering::pt::TemperatureLadder;
    ///
    /// let ladder = TemperatureLadder::linear(1.0, 4.0, 4).unwrap();
    /// assert_eq!(ladder.as_slice(), &[4.0, 3.0, 2.0, 1.0]);
    /// ```
    pub fn linear(min: f64, max: f64, slots: usize) -> Result<Self, ConfigError> {
        if slots < 2 {
            return Err(ConfigError::TooFewReplicas(slots));
        }
        let interval = (max - min) / (slots - 1) as f64;
        let temperatures = (0..slots)
            .map(|slot| min + interval * (slots - 1 - slot) as f64)
            .collect();
        Ok(Self { temperatures })
    }

    #[inline]
    pub fn temperature(&self, slot: usize) -> f64 {
        self.temperatures[slot]
    }

    /// Number of slots, one per replica.
    pub fn slots(&self) -> usize {
        self.temperatures.len()
    }

    /// Index of the coldest slot, which holds the reported solution.
    pub fn coldest_slot(&self) -> usize {
        self.temperatures.len() - 1
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.temperatures
    }
}
