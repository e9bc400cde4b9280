//! TSP domain model.
//!
//! - [`Point`]: a city location in the plane
//! - [`DistanceMatrix`]: precomputed symmetric Euclidean costs
//! - [`tour`]: operations on closed tours (permutations of city indices)

mod distance;
mod point;
pub mod tour;

pub use distance::DistanceMatrix;
pub use point::Point;
