//! Bee Colony Optimization (BCO).
//!
//! A population-based stochastic search inspired by bee foraging. Each
//! generation, every new "bee" copies a source solution drawn by
//! fitness-proportionate (roulette-wheel) selection and perturbs it by
//! flipping exactly one bit. The population is replaced wholesale
//! (non-elitist); the best solution ever seen is tracked separately.
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization"

mod config;
mod runner;

pub use config::BcoConfig;
pub use runner::BcoRunner;
