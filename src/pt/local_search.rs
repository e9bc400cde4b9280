//! Per-replica 2-opt annealing worker.
//!
//! # Algorithm
//!
//! One pass visits every pair `(i, j)` with `0 <= i < n-2` and
//! `i+2 <= j < n` and compares the two edges leaving positions `i` and `j`
//! with their 2-opt reconnection:
//!
//! ```text
//! current = d(t[i], t[i+1]) + d(t[j], t[j+1 mod n])
//! next    = d(t[i], t[j])   + d(t[i+1], t[j+1 mod n])
//! ```
//!
//! The move is taken when it is a strict improvement or when a uniform draw
//! `p` satisfies the Metropolis criterion `p <= exp(-(next - current) / T)`.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;
use tracing::trace;

use super::types::{Replica, SweepStats};
use crate::tsp::tour::flip;
use crate::tsp::DistanceMatrix;

/// Metropolis acceptance probability for a cost change `delta` at
/// `temperature`.
///
/// At zero temperature only strict improvements have non-zero probability.
#[inline]
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    if temperature > 0.0 {
        (-delta / temperature).exp()
    } else if delta < 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Runs `period` full 2-opt passes on `replica` at its fixed temperature.
///
/// Touches only `replica.tour` and `rng`; `matrix` is read-only, so any
/// number of calls on distinct replicas may run concurrently.
pub fn anneal<R: Rng>(
    replica: &mut Replica,
    matrix: &DistanceMatrix,
    period: usize,
    rng: &mut R,
) -> SweepStats {
    let mut stats = SweepStats::default();
    for _ in 0..period {
        stats += sweep(&mut replica.tour, replica.temperature, matrix, rng);
    }
    trace!(
        slot = replica.slot,
        temperature = replica.temperature,
        accepted = stats.accepted_moves,
        improving = stats.improving_moves,
        "anneal done"
    );
    stats
}

/// A single pass over all 2-opt pairs.
fn sweep<R: Rng>(
    tour: &mut [usize],
    temperature: f64,
    matrix: &DistanceMatrix,
    rng: &mut R,
) -> SweepStats {
    let n = tour.len();
    let mut stats = SweepStats::default();

    for i in 0..n.saturating_sub(2) {
        for j in (i + 2)..n {
            let current = matrix.edge_cost(tour, i) + matrix.edge_cost(tour, j);
            let next = matrix.cost(tour[i], tour[j]) + matrix.cost(tour[i + 1], tour[(j + 1) % n]);

            let p: f64 = rng.random();
            let improving = next < current;
            if improving || p <= metropolis_probability(next - current, temperature) {
                flip(tour, i, j);
                stats.accepted_moves += 1;
                if improving {
                    stats.improving_moves += 1;
                }
            }
        }
    }
    stats
}
