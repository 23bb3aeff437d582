//! SA execution loop.

use super::config::{CoolingSchedule, SaConfig};
use crate::problem::{KnapsackInstance, Solution};
use crate::result::RunResult;
use crate::rng::create_rng;
use rand::Rng;
use std::time::Instant;

/// Executes the Simulated Annealing solver.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on `instance` and returns the best solution visited.
    ///
    /// The trajectory starts from the empty packing and moves through the
    /// single-bit-flip neighborhood under Metropolis acceptance. The best
    /// state ever visited is tracked explicitly, so the reported result
    /// does not depend on where the trajectory happens to end.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &KnapsackInstance, config: &SaConfig) -> RunResult {
        config.validate().expect("invalid SaConfig");

        let start = Instant::now();
        let mut rng = create_rng(config.seed);
        let n = instance.len();

        let mut current = Solution::zeros(n);
        let mut current_value = instance.fitness(&current);
        let mut best = current.clone();
        let mut best_value = current_value;

        let mut value_history = vec![best_value];
        let mut temperature = config.initial_temperature;

        for iter in 0..config.iteration_limit {
            let mut neighbor = current.clone();
            neighbor.flip(rng.random_range(0..n));
            let neighbor_value = instance.fitness(&neighbor);
            let delta = neighbor_value - current_value;

            // Metropolis acceptance, maximizing: always take improvements,
            // take worsening moves with probability exp(delta / T).
            let accept =
                delta > 0.0 || rng.random_range(0.0..1.0) < (delta / temperature).exp();

            if accept {
                current = neighbor;
                current_value = neighbor_value;

                if current_value > best_value {
                    best = current.clone();
                    best_value = current_value;
                }
            }

            if (iter + 1) % config.history_interval == 0 {
                value_history.push(best_value);
            }

            temperature = cool(temperature, config, iter);
        }

        if value_history.last() != Some(&best_value) {
            value_history.push(best_value);
        }

        RunResult {
            best_value,
            best_weight: instance.weight_of(&best),
            best,
            elapsed_seconds: start.elapsed().as_secs_f64(),
            work_complexity: config.iteration_limit as u64,
            value_history,
        }
    }
}

/// Apply the cooling schedule, flooring at the minimum temperature.
fn cool(temperature: f64, config: &SaConfig, iter: usize) -> f64 {
    let next = match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::Linear => {
            config.initial_temperature
                - (iter + 1) as f64 * (config.initial_temperature - config.min_temperature)
                    / config.iteration_limit as f64
        }
    };
    next.max(config.min_temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_instance() -> KnapsackInstance {
        KnapsackInstance::new(&[2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0], 5.0).unwrap()
    }

    #[test]
    fn test_sa_finds_small_optimum() {
        let instance = small_instance();
        let config = SaConfig::default().with_seed(42);

        let result = SaRunner::run(&instance, &config);

        // Optimum packs items 0 and 1: value 7, weight 5.
        assert!((result.best_value - 7.0).abs() < 1e-12);
        assert!(result.best_weight <= 5.0 + 1e-12);
        assert_eq!(result.best.len(), 4);
    }

    #[test]
    fn test_sa_loose_capacity_selects_everything() {
        let instance =
            KnapsackInstance::new(&[2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0], 100.0).unwrap();
        let config = SaConfig::default().with_seed(7);

        let result = SaRunner::run(&instance, &config);

        assert_eq!(result.best.count_selected(), 4);
        assert!((result.best_value - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_sa_single_overweight_item_stays_empty() {
        let instance = KnapsackInstance::new(&[10.0], &[5.0], 5.0).unwrap();
        let config = SaConfig::default().with_seed(3);

        let result = SaRunner::run(&instance, &config);

        // Packing the item scores 5 − 5·10 = −45; the empty packing wins.
        assert_eq!(result.best.count_selected(), 0);
        assert!((result.best_value - 0.0).abs() < 1e-12);
        assert!((result.best_weight - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_sa_deterministic_with_seed() {
        let instance = small_instance();
        let config = SaConfig::default().with_seed(123);

        let a = SaRunner::run(&instance, &config);
        let b = SaRunner::run(&instance, &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_value, b.best_value);
        assert_eq!(a.value_history, b.value_history);
    }

    #[test]
    fn test_sa_work_complexity_is_iteration_limit() {
        let instance = small_instance();
        let config = SaConfig::default().with_iteration_limit(1234).with_seed(1);

        let result = SaRunner::run(&instance, &config);
        assert_eq!(result.work_complexity, 1234);
    }

    #[test]
    fn test_sa_history_non_decreasing() {
        let instance = small_instance();
        let config = SaConfig::default().with_seed(9);

        let result = SaRunner::run(&instance, &config);

        for window in result.value_history.windows(2) {
            assert!(
                window[1] >= window[0] - 1e-12,
                "best value history must be non-decreasing: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_sa_linear_cooling() {
        let instance = small_instance();
        let config = SaConfig::default()
            .with_cooling(CoolingSchedule::Linear)
            .with_seed(42);

        let result = SaRunner::run(&instance, &config);
        assert!((result.best_value - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_sa_reported_weight_matches_state() {
        let instance = small_instance();
        let result = SaRunner::run(&instance, &SaConfig::default().with_seed(5));

        let expected: f64 = instance
            .items()
            .iter()
            .zip(result.best.bits())
            .filter(|(_, &b)| b)
            .map(|(item, _)| item.weight)
            .sum();
        assert!((result.best_weight - expected).abs() < 1e-12);
    }
}
