//! BCO execution loop.

use super::config::BcoConfig;
use crate::problem::{KnapsackInstance, Solution};
use crate::result::RunResult;
use crate::rng::create_rng;
use rand::Rng;
use std::time::Instant;

/// Selection-weight offset so the worst bee keeps a non-zero probability.
const SELECTION_EPSILON: f64 = 1e-6;

/// Executes the Bee Colony solver.
pub struct BcoRunner;

impl BcoRunner {
    /// Runs BCO on `instance` and returns the best solution ever seen.
    ///
    /// Selection weights are `fitness − min(fitness) + ε`, which keeps the
    /// wheel well-defined even when the penalty pushes fitness negative.
    /// Replacement is non-elitist: the best individual is not guaranteed to
    /// survive in the population, so the running best is tracked outside it.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`BcoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &KnapsackInstance, config: &BcoConfig) -> RunResult {
        config.validate().expect("invalid BcoConfig");

        let start = Instant::now();
        let mut rng = create_rng(config.seed);
        let n = instance.len();

        let mut population: Vec<Solution> = (0..config.num_bees)
            .map(|_| Solution::random(n, &mut rng))
            .collect();
        let mut fitness: Vec<f64> = population.iter().map(|s| instance.fitness(s)).collect();

        let (mut best, mut best_value) = current_best(&population, &fitness);
        let mut value_history = vec![best_value];

        for _gen in 0..config.num_iterations {
            let weights = selection_weights(&fitness);
            let total: f64 = weights.iter().sum();

            population = (0..config.num_bees)
                .map(|_| {
                    let source = spin_wheel(&weights, total, &mut rng);
                    let mut candidate = population[source].clone();
                    candidate.flip(rng.random_range(0..n));
                    candidate
                })
                .collect();
            fitness = population.iter().map(|s| instance.fitness(s)).collect();

            // Running best-so-far scan over the replaced population.
            for (solution, &f) in population.iter().zip(&fitness) {
                if f > best_value {
                    best_value = f;
                    best = solution.clone();
                }
            }
            value_history.push(best_value);
        }

        RunResult {
            best_value,
            best_weight: instance.weight_of(&best),
            best,
            elapsed_seconds: start.elapsed().as_secs_f64(),
            work_complexity: (config.num_bees * config.num_iterations) as u64,
            value_history,
        }
    }
}

/// Shift fitness so all selection weights are strictly positive.
fn selection_weights(fitness: &[f64]) -> Vec<f64> {
    let min = fitness.iter().copied().fold(f64::INFINITY, f64::min);
    fitness.iter().map(|f| f - min + SELECTION_EPSILON).collect()
}

/// Roulette-wheel draw over positive weights.
fn spin_wheel<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let mut remaining = rng.random_range(0.0..total);
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            return index;
        }
    }
    weights.len() - 1
}

fn current_best(population: &[Solution], fitness: &[f64]) -> (Solution, f64) {
    let mut best_index = 0;
    for (index, &f) in fitness.iter().enumerate() {
        if f > fitness[best_index] {
            best_index = index;
        }
    }
    (population[best_index].clone(), fitness[best_index])
}
