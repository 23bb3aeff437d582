//! Shared run result.

use crate::problem::Solution;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a completed solver run.
///
/// Every solver returns the same shape so runs of different algorithms on
/// the same instance can be compared directly. A run that starts always
/// produces a result; the heuristics never fail mid-search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult {
    /// Best solution visited during the run.
    pub best: Solution,

    /// Penalized value of `best`. For a feasible `best` this is the plain
    /// value sum.
    pub best_value: f64,

    /// Unpenalized weight of `best`: the raw `Σ weight·bit` sum.
    pub best_weight: f64,

    /// Wall-clock duration of the run, in seconds.
    pub elapsed_seconds: f64,

    /// Work-complexity proxy: total candidate evaluations budgeted for the
    /// run (iteration limit for SA, population × generations for the
    /// population solvers).
    pub work_complexity: u64,

    /// Running best value sampled over the run: once per generation for the
    /// population solvers, at a fixed interval for SA. Non-decreasing.
    pub value_history: Vec<f64>,
}
