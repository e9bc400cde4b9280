//! Precomputed symmetric distance table.

use super::point::Point;

/// Dense n×n Euclidean cost table over city indices.
///
/// Built once and read-only afterwards, so a single instance is shared by
/// reference across all workers without synchronization.
///
/// # Examples
///
/// ```
/// use u_tempering::tsp::{DistanceMatrix, Point};
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 0.0)];
/// let matrix = DistanceMatrix::from_points(&points);
/// assert_eq!(matrix.cost(0, 1), 5.0);
/// assert_eq!(matrix.tour_cost(&[0, 1, 2]), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    size: usize,
    costs: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the table in O(n²), computing each unordered pair once.
    pub fn from_points(points: &[Point]) -> Self {
        let size = points.len();
        let mut costs = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let cost = points[i].distance(&points[j]);
                costs[i * size + j] = cost;
                costs[j * size + i] = cost;
            }
        }
        Self { size, costs }
    }

    /// Number of cities.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost between cities `i` and `j`.
    ///
    /// Callers must pass indices below [`size`](Self::size); the range is
    /// only checked in debug builds.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.size && j < self.size, "city index out of range");
        self.costs[i * self.size + j]
    }

    /// Cost of the edge leaving tour position `k`, wrapping from the last
    /// position back to the first.
    #[inline]
    pub fn edge_cost(&self, tour: &[usize], k: usize) -> f64 {
        let n = tour.len();
        self.cost(tour[k % n], tour[(k + 1) % n])
    }

    /// Total length of `tour` as a closed cycle.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        (0..tour.len()).map(|k| self.edge_cost(tour, k)).sum()
    }
}
