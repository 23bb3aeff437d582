//! GA evolutionary loop execution.

use super::config::GaConfig;
use crate::problem::{KnapsackInstance, Solution};
use crate::result::RunResult;
use crate::rng::create_rng;
use rand::Rng;
use std::time::Instant;

/// A population member with its cached fitness.
#[derive(Debug, Clone)]
struct Scored {
    solution: Solution,
    fitness: f64,
}

/// Executes the Genetic Algorithm solver.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on `instance` and returns the best solution ever seen.
    ///
    /// Selection is rank-based truncation: the top `population_size / 2`
    /// individuals survive each generation and also serve as the parent
    /// pool for the children that refill the population to its exact size.
    ///
    /// Instances with a single item have no interior crossover cut point;
    /// children are then clones of one parent and the search degenerates to
    /// mutation-only, which is still sound.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &KnapsackInstance, config: &GaConfig) -> RunResult {
        config.validate().expect("invalid GaConfig");

        let start = Instant::now();
        let mut rng = create_rng(config.seed);
        let n = instance.len();

        let mut population: Vec<Scored> = (0..config.population_size)
            .map(|_| {
                let solution = Solution::random(n, &mut rng);
                Scored {
                    fitness: instance.fitness(&solution),
                    solution,
                }
            })
            .collect();

        let initial_best = population
            .iter()
            .max_by(|a, b| {
                a.fitness
                    .partial_cmp(&b.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("population is non-empty");
        let mut best = initial_best.solution.clone();
        let mut best_value = initial_best.fitness;
        let mut value_history = vec![best_value];

        let parent_count = config.population_size / 2;
        let child_count = config.population_size - parent_count;

        for _gen in 0..config.generations {
            // Rank-based truncation: best first, keep the top half.
            population.sort_by(|a, b| {
                b.fitness
                    .partial_cmp(&a.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            population.truncate(parent_count);

            let mut children = Vec::with_capacity(child_count);
            for _ in 0..child_count {
                let p1 = &population[rng.random_range(0..parent_count)];
                let p2 = &population[rng.random_range(0..parent_count)];
                let mut child = crossover(&p1.solution, &p2.solution, &mut rng);

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    child.flip(rng.random_range(0..n));
                }

                children.push(Scored {
                    fitness: instance.fitness(&child),
                    solution: child,
                });
            }
            population.append(&mut children);

            // Running best-so-far scan over survivors and children.
            for member in &population {
                if member.fitness > best_value {
                    best_value = member.fitness;
                    best = member.solution.clone();
                }
            }
            value_history.push(best_value);
        }

        RunResult {
            best_value,
            best_weight: instance.weight_of(&best),
            best,
            elapsed_seconds: start.elapsed().as_secs_f64(),
            work_complexity: (config.generations * config.population_size) as u64,
            value_history,
        }
    }
}

/// Single-point crossover with a cut uniform in `[1, n − 1]`.
///
/// With fewer than two bits there is no interior cut point, so the child is
/// a clone of the first parent.
fn crossover<R: Rng>(p1: &Solution, p2: &Solution, rng: &mut R) -> Solution {
    let n = p1.len();
    if n < 2 {
        return p1.clone();
    }
    let point = rng.random_range(1..n);
    let mut bits = Vec::with_capacity(n);
    bits.extend_from_slice(&p1.bits()[..point]);
    bits.extend_from_slice(&p2.bits()[point..]);
    Solution::from_bits(bits)
}
