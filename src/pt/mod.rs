//! Parallel Tempering (replica exchange) with 2-opt annealing.
//!
//! Several replicas of the same TSP instance are annealed at fixed,
//! linearly spaced temperatures. After every round of local search,
//! adjacent slots may exchange tours, so good tours drift towards the cold
//! end of the ladder while hot replicas keep exploring.
//!
//! # Key Types
//!
//! - [`PtConfig`]: temperature range, replica count, period, iterations
//! - [`TemperatureLadder`]: fixed per-slot temperatures
//! - [`PtState`]: initialized solver, advanced one iteration at a time
//! - [`PtRunner`]: runs a complete solve
//! - [`PtResult`]: coldest tour, its cost, and run statistics
//!
//! # References
//!
//! - Swendsen & Wang (1986), "Replica Monte Carlo simulation of spin glasses"
//! - Hukushima & Nemoto (1996), "Exchange Monte Carlo method and application
//!   to spin glass simulations"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
pub mod exchange;
mod ladder;
pub mod local_search;
mod runner;
mod types;

pub use config::PtConfig;
pub use ladder::TemperatureLadder;
pub use runner::{PtResult, PtRunner, PtState};
pub use types::{Replica, SweepStats};
