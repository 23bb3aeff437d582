//! Genetic Algorithm (GA).
//!
//! A population-based evolutionary search. Each generation the top half of
//! the population by fitness rank survives as the parent pool, and the rest
//! of the population is refilled with children produced by single-point
//! crossover and occasional one-bit mutation. Survivors carry over
//! unchanged, so the scheme is elitist by construction.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::GaRunner;
