//! Closed-tour helpers.
//!
//! A tour is a `Vec<usize>` holding a permutation of `0..n`; the edge from
//! the last city back to the first is implicit.

use rand::seq::SliceRandom;
use rand::Rng;

/// A candidate route: a permutation of city indices read as a cycle.
pub type Tour = Vec<usize>;

/// Returns the identity tour `0, 1, ..., n-1`.
pub fn identity(n: usize) -> Tour {
    (0..n).collect()
}

/// Returns a uniformly shuffled tour over `n` cities.
pub fn random<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour = identity(n);
    tour.shuffle(rng);
    tour
}

/// Whether `tour` visits every city of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// 2-opt flip: reverses positions `i+1 ..= j` in place.
///
/// Replaces edges `(tour[i], tour[i+1])` and `(tour[j], tour[j+1])` with
/// `(tour[i], tour[j])` and `(tour[i+1], tour[j+1])`.
#[inline]
pub fn flip(tour: &mut [usize], i: usize, j: usize) {
    tour[i + 1..=j].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::{DistanceMatrix, Point};
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_flip_reverses_inner_segment() {
        let mut tour = vec![0, 1, 2, 3, 4, 5];
        flip(&mut tour, 1, 4);
        assert_eq!(tour, vec![0, 1, 4, 3, 2, 5]);
    }

    #[test]
    fn test_flip_uncrosses_square() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let m = DistanceMatrix::from_points(&points);
        let mut tour = vec![0, 2, 1, 3];
        flip(&mut tour, 0, 2);
        assert_eq!(tour, vec![0, 1, 2, 3]);
        assert!((m.tour_cost(&tour) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for n in 0..20 {
            assert!(is_permutation(&random(n, &mut rng), n));
        }
    }

    proptest! {
        #[test]
        fn prop_cost_invariant_under_rotation_and_reversal(
            coords in prop::collection::vec((0f64..100.0, 0f64..100.0), 3..25),
            seed in any::<u64>(),
            shift in 0usize..25,
        ) {
            let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let m = DistanceMatrix::from_points(&points);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let tour = random(points.len(), &mut rng);
            let base = m.tour_cost(&tour);

            let mut rotated = tour.clone();
            rotated.rotate_left(shift % tour.len());
            prop_assert!((m.tour_cost(&rotated) - base).abs() < 1e-9);

            let mut reversed = tour.clone();
            reversed.reverse();
            prop_assert!((m.tour_cost(&reversed) - base).abs() < 1e-9);
        }

        #[test]
        fn prop_flip_keeps_permutation(n in 3usize..40, seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut tour = random(n, &mut rng);
            let i = rng.random_range(0..n - 2);
            let j = rng.random_range(i + 2..n);
            flip(&mut tour, i, j);
            prop_assert!(is_permutation(&tour, n));
        }
    }
}
