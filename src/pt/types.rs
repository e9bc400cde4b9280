//! Replica state.

use crate::tsp::tour::Tour;

/// One candidate solution held at a fixed temperature slot.
///
/// The temperature belongs to the slot and never changes; exchanges move
/// whole tours between slots.
#[derive(Debug, Clone)]
pub struct Replica {
    /// Position in the temperature ladder.
    pub slot: usize,

    /// The tour currently held by this slot.
    pub tour: Tour,

    /// Fixed temperature of this slot.
    pub temperature: f64,
}

impl Replica {
    pub fn new(slot: usize, tour: Tour, temperature: f64) -> Self {
        Self {
            slot,
            tour,
            temperature,
        }
    }
}

/// Move counters from one or more annealing passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Flips performed, including improvements.
    pub accepted_moves: usize,

    /// Flips that strictly shortened the tour.
    pub improving_moves: usize,
}

impl std::ops::AddAssign for SweepStats {
    fn add_assign(&mut self, rhs: Self) {
        self.accepted_moves += rhs.accepted_moves;
        self.improving_moves += rhs.improving_moves;
    }
}
