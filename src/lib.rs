//! Parallel tempering solver for the Traveling Salesman Problem.
//!
//! Several replicas of one tour are annealed with 2-opt moves at fixed,
//! linearly spaced temperatures. Each iteration runs all replicas in
//! parallel, joins them, and then lets adjacent temperature slots exchange
//! tours. The coldest slot's tour is the answer.
//!
//! - [`tsp`]: points, the distance matrix, and tour operations
//! - [`pt`]: the optimizer (configuration, ladder, local search, exchange,
//!   runner)
//! - [`io`]: point files, reference tours, run files, and reports
//! - [`error`]: error types
//!
//! # Example
//!
//! ```
//! use u_tempering::pt::{PtConfig, PtRunner};
//! use u_tempering::tsp::Point;
//!
//! let points: Vec<Point> = (0..8)
//!     .map(|k| {
//!         let a = k as f64 * std::f64::consts::TAU / 8.0;
//!         Point::new(a.cos(), a.sin())
//!     })
//!     .collect();
//!
//! let config = PtConfig::new(0.01, 1.0, 4, 10, 30).with_seed(42);
//! let result = PtRunner::run(&points, &config).unwrap();
//! assert_eq!(result.tour.len(), 8);
//! ```

pub mod error;
pub mod io;
pub mod pt;
pub mod tsp;

pub use error::{Error, Result};
