//! Metaheuristic solvers for the 0/1 knapsack problem.
//!
//! Three independent search strategies over a shared problem
//! representation and penalized fitness function:
//!
//! - **Simulated Annealing (SA)**: single-trajectory local search with
//!   temperature-controlled acceptance of worsening moves.
//! - **Bee Colony Optimization (BCO)**: population search with
//!   fitness-proportionate selection and single-bit perturbation.
//! - **Genetic Algorithm (GA)**: evolutionary search with rank-based
//!   truncation selection, single-point crossover, and bit-flip mutation.
//!
//! All three are anytime heuristics: they run a fixed iteration or
//! generation budget and report the best solution visited, its penalized
//! value, its raw weight, the elapsed wall time, and a work-complexity
//! count. None of them guarantees optimality.
//!
//! # Architecture
//!
//! Solvers share only the immutable [`KnapsackInstance`] and the
//! [`Solution`] bit-vector representation; they hold no mutable state in
//! common and each run owns its own seeded RNG, so different solvers may
//! be run concurrently on the same instance from independent threads.
//!
//! # Examples
//!
//! ```
//! use knapsack_metaheur::ga::GaConfig;
//! use knapsack_metaheur::run_genetic_algorithm;
//!
//! let result = run_genetic_algorithm(
//!     &[2.0, 3.0, 4.0, 5.0],
//!     &[3.0, 4.0, 5.0, 6.0],
//!     5.0,
//!     &GaConfig::default().with_seed(42),
//! )?;
//! assert!(result.best_weight <= 5.0);
//! # Ok::<(), knapsack_metaheur::InstanceError>(())
//! ```

mod api;
pub mod bco;
pub mod dataset;
pub mod error;
pub mod ga;
pub mod problem;
pub mod result;
mod rng;
pub mod sa;

pub use api::{run_bee_colony, run_genetic_algorithm, run_simulated_annealing};
pub use dataset::generate_random_instance;
pub use error::InstanceError;
pub use problem::{Evaluation, Item, KnapsackInstance, Solution, DEFAULT_PENALTY_FACTOR};
pub use result::RunResult;
