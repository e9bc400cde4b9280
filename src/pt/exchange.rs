//! Replica exchange between adjacent temperature slots.
//!
//! Slot pairs follow an odd-even transposition schedule: even iterations
//! test `(0,1), (2,3), ...`, odd iterations test `(1,2), (3,4), ...`, so
//! every adjacent pair is tested every other iteration.
//!
//! For a pair `(cur, next)` with `dT = T[next] - T[cur]` and
//! `dV = cost(next) - cost(cur)`, the tours are swapped when `dT * dV < 0`
//! (the colder slot holds the worse tour) or when a uniform draw satisfies
//! `p <= exp(-dT * dV / (T[next] * T[cur]))`.
//!
//! # References
//!
//! - Swendsen & Wang (1986), "Replica Monte Carlo simulation of spin glasses"
//! - Hukushima & Nemoto (1996), "Exchange Monte Carlo method and application
//!   to spin glass simulations"

use rand::Rng;
use tracing::trace;

use super::types::Replica;
use crate::tsp::DistanceMatrix;

/// Slot pairs tested on `iteration` for a ladder of `slots` replicas.
pub fn pairs(iteration: usize, slots: usize) -> impl Iterator<Item = (usize, usize)> {
    let first = iteration % 2;
    (first..slots.saturating_sub(1))
        .step_by(2)
        .map(|cur| (cur, cur + 1))
}

/// Exchange acceptance probability `exp(-dT * dV / (t_next * t_cur))`.
///
/// A zero product `dT * dV` yields exactly 1, also when a temperature is
/// zero.
#[inline]
pub fn swap_probability(delta_temperature: f64, delta_value: f64, t_next: f64, t_cur: f64) -> f64 {
    let product = delta_temperature * delta_value;
    if product == 0.0 {
        1.0
    } else {
        (-product / (t_next * t_cur)).exp()
    }
}

/// Tests one pair and swaps their tours on acceptance.
///
/// Temperatures stay with their slots. Returns whether the swap happened.
///
/// # Panics
/// Panics unless `cur < next < replicas.len()`.
pub fn attempt_swap<R: Rng>(
    replicas: &mut [Replica],
    cur: usize,
    next: usize,
    matrix: &DistanceMatrix,
    rng: &mut R,
) -> bool {
    assert!(cur < next && next < replicas.len(), "invalid slot pair");
    let (low, high) = replicas.split_at_mut(next);
    let a = &mut low[cur];
    let b = &mut high[0];

    let delta_temperature = b.temperature - a.temperature;
    let delta_value = matrix.tour_cost(&b.tour) - matrix.tour_cost(&a.tour);

    let p: f64 = rng.random();
    let q = swap_probability(delta_temperature, delta_value, b.temperature, a.temperature);

    let accepted = delta_temperature * delta_value < 0.0 || p <= q;
    if accepted {
        std::mem::swap(&mut a.tour, &mut b.tour);
    }
    trace!(cur, next, delta_temperature, delta_value, q, accepted, "exchange");
    accepted
}

/// Per-pair exchange counters, indexed by the lower slot of the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeStats {
    pub attempts: Vec<u64>,
    pub accepted: Vec<u64>,
}

impl ExchangeStats {
    pub fn new(slots: usize) -> Self {
        let pairs = slots.saturating_sub(1);
        Self {
            attempts: vec![0; pairs],
            accepted: vec![0; pairs],
        }
    }

    /// Acceptance rate of the pair `(slot, slot + 1)`.
    pub fn rate(&self, slot: usize) -> f64 {
        if self.attempts[slot] == 0 {
            0.0
        } else {
            self.accepted[slot] as f64 / self.attempts[slot] as f64
        }
    }

    pub fn total_accepted(&self) -> u64 {
        self.accepted.iter().sum()
    }
}

/// Runs the exchange step for `iteration`. Returns the number of swaps.
///
/// Must only be called between parallel phases; it is the sole writer of
/// the replica array at that point.
pub fn exchange_round<R: Rng>(
    replicas: &mut [Replica],
    iteration: usize,
    matrix: &DistanceMatrix,
    rng: &mut R,
    stats: &mut ExchangeStats,
) -> usize {
    let mut swaps = 0;
    for (cur, next) in pairs(iteration, replicas.len()) {
        stats.attempts[cur] += 1;
        if attempt_swap(replicas, cur, next, matrix, rng) {
            stats.accepted[cur] += 1;
            swaps += 1;
        }
    }
    swaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::{tour, Point};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    const GOOD: [usize; 4] = [0, 1, 2, 3];
    const BAD: [usize; 4] = [0, 2, 1, 3];

    #[test]
    fn test_pairs_schedule() {
        assert_eq!(pairs(0, 5).collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert_eq!(pairs(1, 5).collect::<Vec<_>>(), vec![(1, 2), (3, 4)]);
        assert_eq!(pairs(2, 4).collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert_eq!(pairs(3, 4).collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(pairs(0, 2).collect::<Vec<_>>(), vec![(0, 1)]);
        assert_eq!(pairs(1, 2).count(), 0);
    }

    #[test]
    fn test_every_adjacent_pair_tested_within_two_iterations() {
        let slots = 7;
        let mut seen = vec![false; slots - 1];
        for it in 0..2 {
            for (cur, next) in pairs(it, slots) {
                assert_eq!(next, cur + 1);
                seen[cur] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_swap_probability() {
        assert_eq!(swap_probability(0.0, 3.0, 1.0, 1.0), 1.0);
        assert_eq!(swap_probability(-2.0, 0.0, 1.0, 3.0), 1.0);
        assert_eq!(swap_probability(0.0, 5.0, 0.0, 0.0), 1.0);
        let q = swap_probability(-1.0, -2.0, 1.0, 2.0);
        assert!((q - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_worse_tour_in_colder_slot_always_swaps() {
        let m = square();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..50 {
            let mut replicas = vec![
                Replica::new(0, GOOD.to_vec(), 10.0),
                Replica::new(1, BAD.to_vec(), 1.0),
            ];
            assert!(attempt_swap(&mut replicas, 0, 1, &m, &mut rng));
            assert_eq!(replicas[1].tour, GOOD.to_vec());
            assert_eq!(replicas[0].tour, BAD.to_vec());
            assert_eq!(replicas[0].temperature, 10.0);
            assert_eq!(replicas[1].temperature, 1.0);
        }
    }

    #[test]
    fn test_better_tour_in_colder_slot_mostly_stays() {
        // q = exp(-dT * dV / (T0 * T1)) is about exp(-83) here
        let m = square();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut replicas = vec![
            Replica::new(0, BAD.to_vec(), 1000.0),
            Replica::new(1, GOOD.to_vec(), 0.01),
        ];
        for _ in 0..50 {
            assert!(!attempt_swap(&mut replicas, 0, 1, &m, &mut rng));
        }
        assert_eq!(replicas[1].tour, GOOD.to_vec());
    }

    #[test]
    fn test_equal_temperatures_always_swap() {
        let m = square();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut replicas = vec![
            Replica::new(0, BAD.to_vec(), 2.0),
            Replica::new(1, GOOD.to_vec(), 2.0),
        ];
        for k in 0..20 {
            assert!(attempt_swap(&mut replicas, 0, 1, &m, &mut rng));
            let expected = if k % 2 == 0 { BAD } else { GOOD };
            assert_eq!(replicas[1].tour, expected.to_vec());
        }
    }

    #[test]
    fn test_exchange_round_counts() {
        let m = square();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut replicas: Vec<Replica> = (0..4)
            .map(|s| Replica::new(s, BAD.to_vec(), 1.0))
            .collect();
        let mut stats = ExchangeStats::new(4);

        // equal temperatures: every tested pair swaps
        assert_eq!(exchange_round(&mut replicas, 0, &m, &mut rng, &mut stats), 2);
        assert_eq!(exchange_round(&mut replicas, 1, &m, &mut rng, &mut stats), 1);
        assert_eq!(stats.attempts, vec![1, 1, 1]);
        assert_eq!(stats.accepted, vec![1, 1, 1]);
        assert_eq!(stats.total_accepted(), 3);
        assert!((stats.rate(1) - 1.0).abs() < 1e-12);
        assert_eq!(ExchangeStats::new(4).rate(0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_exchange_conserves_tours(
            slots in 2usize..8,
            iteration in 0usize..10,
            seed in any::<u64>(),
        ) {
            let points: Vec<Point> = (0..9)
                .map(|k| Point::new((k * 7 % 5) as f64, (k * 3 % 4) as f64))
                .collect();
            let m = DistanceMatrix::from_points(&points);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut replicas: Vec<Replica> = (0..slots)
                .map(|s| Replica::new(s, tour::random(9, &mut rng), 1.0 + s as f64))
                .collect();

            let mut before: Vec<Vec<usize>> = replicas.iter().map(|r| r.tour.clone()).collect();
            let temps: Vec<f64> = replicas.iter().map(|r| r.temperature).collect();
            let mut stats = ExchangeStats::new(slots);
            exchange_round(&mut replicas, iteration, &m, &mut rng, &mut stats);

            let mut after: Vec<Vec<usize>> = replicas.iter().map(|r| r.tour.clone()).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
            for (r, t) in replicas.iter().zip(temps) {
                prop_assert_eq!(r.temperature, t);
                prop_assert!(tour::is_permutation(&r.tour, 9));
            }
        }
    }
}
