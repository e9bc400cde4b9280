//! Parallel tempering execution loop.
//!
//! Each iteration is a strict fork-join cycle:
//!
//! 1. **Local search**: one worker per replica runs
//!    [`anneal`](super::local_search::anneal) in parallel. Each worker
//!    borrows exactly one replica and one random source mutably; the
//!    distance matrix is shared read-only.
//! 2. **Barrier**: the parallel iterator joins all workers.
//! 3. **Exchange**: the orchestrator alone runs
//!    [`exchange_round`](super::exchange::exchange_round) for the
//!    iteration's parity.
//!
//! After `max_iterations` cycles the tour in the coldest slot is the answer.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use super::config::PtConfig;
use super::exchange::{exchange_round, ExchangeStats};
use super::ladder::TemperatureLadder;
use super::local_search::anneal;
use super::types::{Replica, SweepStats};
use crate::error::{InputError, Result};
use crate::tsp::tour::{self, Tour};
use crate::tsp::{DistanceMatrix, Point};

/// Result of a parallel tempering run.
#[derive(Debug, Clone)]
pub struct PtResult {
    /// Tour held by the coldest slot at the end of the run.
    pub tour: Tour,

    /// Closed-tour length of `tour`.
    pub cost: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Temperature ladder, hottest first.
    pub temperatures: Vec<f64>,

    /// 2-opt flips performed across all replicas.
    pub accepted_moves: usize,

    /// Flips that strictly shortened a tour.
    pub improving_moves: usize,

    /// Exchange attempts per adjacent pair, indexed by the lower slot.
    pub swap_attempts: Vec<u64>,

    /// Accepted exchanges per adjacent pair, indexed by the lower slot.
    pub swap_accepted: Vec<u64>,

    /// Coldest-slot cost before the first iteration and after each one.
    pub cost_history: Vec<f64>,
}

/// Initialized solver state.
///
/// Construction validates the configuration and the input, builds the
/// distance matrix and the ladder, and seeds every replica with the same
/// shuffled tour. From then on [`step`](Self::step) cannot fail.
pub struct PtState {
    config: PtConfig,
    matrix: DistanceMatrix,
    ladder: TemperatureLadder,
    replicas: Vec<Replica>,
    worker_rngs: Vec<ChaCha8Rng>,
    rng: ChaCha8Rng,
    iteration: usize,
    sweeps: SweepStats,
    exchanges: ExchangeStats,
    cost_history: Vec<f64>,
}

impl PtState {
    /// Builds the initial state for `points`.
    ///
    /// # Errors
    /// [`ConfigError`](crate::error::ConfigError) for an invalid `config`,
    /// [`InputError::TooFewCities`] for fewer than 3 points.
    pub fn new(points: &[Point], config: &PtConfig) -> Result<Self> {
        config.validate()?;
        if points.len() < 3 {
            return Err(InputError::TooFewCities {
                found: points.len(),
            }
            .into());
        }

        let matrix = DistanceMatrix::from_points(points);
        let ladder =
            TemperatureLadder::linear(config.min_temperature, config.max_temperature, config.replicas)?;

        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let initial = tour::random(matrix.size(), &mut rng);
        let replicas: Vec<Replica> = (0..ladder.slots())
            .map(|slot| Replica::new(slot, initial.clone(), ladder.temperature(slot)))
            .collect();
        let worker_rngs = (0..ladder.slots())
            .map(|_| ChaCha8Rng::seed_from_u64(rng.random()))
            .collect();

        let initial_cost = matrix.tour_cost(&initial);
        info!(
            cities = matrix.size(),
            replicas = ladder.slots(),
            period = config.period,
            max_iterations = config.max_iterations,
            seed,
            initial_cost,
            "parallel tempering initialized"
        );

        Ok(Self {
            config: config.clone(),
            exchanges: ExchangeStats::new(ladder.slots()),
            matrix,
            ladder,
            replicas,
            worker_rngs,
            rng,
            iteration: 0,
            sweeps: SweepStats::default(),
            cost_history: vec![initial_cost],
        })
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn ladder(&self) -> &TemperatureLadder {
        &self.ladder
    }

    pub fn replicas(&self) -> &[Replica] {
        &self.replicas
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_done(&self) -> bool {
        self.iteration >= self.config.max_iterations
    }

    /// Tour currently held by the coldest slot.
    pub fn coldest_tour(&self) -> &[usize] {
        &self.replicas[self.ladder.coldest_slot()].tour
    }

    pub fn coldest_cost(&self) -> f64 {
        self.matrix.tour_cost(self.coldest_tour())
    }

    /// Runs one local-search/exchange cycle. Returns `false` once all
    /// configured iterations have completed.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }

        let matrix = &self.matrix;
        let period = self.config.period;
        let sweeps: Vec<SweepStats> = self
            .replicas
            .par_iter_mut()
            .zip(self.worker_rngs.par_iter_mut())
            .map(|(replica, rng)| anneal(replica, matrix, period, rng))
            .collect();
        for s in sweeps {
            self.sweeps += s;
        }

        let swaps = exchange_round(
            &mut self.replicas,
            self.iteration,
            &self.matrix,
            &mut self.rng,
            &mut self.exchanges,
        );

        let cost = self.coldest_cost();
        self.cost_history.push(cost);
        debug!(iteration = self.iteration, swaps, coldest_cost = cost, "iteration done");

        self.iteration += 1;
        true
    }

    /// Runs the remaining iterations.
    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Extracts the result from the coldest slot.
    pub fn into_result(mut self) -> PtResult {
        let coldest = self.ladder.coldest_slot();
        let tour = std::mem::take(&mut self.replicas[coldest].tour);
        let cost = self.matrix.tour_cost(&tour);

        info!(
            iterations = self.iteration,
            cost,
            accepted_moves = self.sweeps.accepted_moves,
            swaps = self.exchanges.total_accepted(),
            "parallel tempering finished"
        );

        PtResult {
            tour,
            cost,
            iterations: self.iteration,
            temperatures: self.ladder.as_slice().to_vec(),
            accepted_moves: self.sweeps.accepted_moves,
            improving_moves: self.sweeps.improving_moves,
            swap_attempts: self.exchanges.attempts,
            swap_accepted: self.exchanges.accepted,
            cost_history: self.cost_history,
        }
    }
}

/// Executes parallel tempering.
pub struct PtRunner;

impl PtRunner {
    /// Runs all configured iterations on `points`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tempering::pt::{PtConfig, PtRunner};
    /// use u_tempering::tsp::Point;
    ///
    /// let square = [
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ];
    /// let config = PtConfig::new(0.1, 10.0, 4, 5, 20).with_seed(7);
    /// let result = PtRunner::run(&square, &config).unwrap();
    /// assert!((result.cost - 4.0).abs() < 1e-9);
    /// ```
    pub fn run(points: &[Point], config: &PtConfig) -> Result<PtResult> {
        let mut state = PtState::new(points, config)?;
        state.run();
        Ok(state.into_result())
    }
}
