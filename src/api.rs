//! Convenience entry points over raw weight/value slices.
//!
//! Each function validates the input by constructing a
//! [`KnapsackInstance`], then delegates to the matching runner. Malformed
//! input is rejected before any search starts; a run that starts always
//! returns a [`RunResult`].

use crate::bco::{BcoConfig, BcoRunner};
use crate::error::InstanceError;
use crate::ga::{GaConfig, GaRunner};
use crate::problem::KnapsackInstance;
use crate::result::RunResult;
use crate::sa::{SaConfig, SaRunner};

/// Solves the instance with Simulated Annealing.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::{run_simulated_annealing, sa::SaConfig};
///
/// let result = run_simulated_annealing(
///     &[2.0, 3.0, 4.0, 5.0],
///     &[3.0, 4.0, 5.0, 6.0],
///     5.0,
///     &SaConfig::default().with_seed(42),
/// )?;
/// assert!(result.best_value <= 7.0);
/// # Ok::<(), knapsack_metaheur::InstanceError>(())
/// ```
pub fn run_simulated_annealing(
    weights: &[f64],
    values: &[f64],
    capacity: f64,
    config: &SaConfig,
) -> Result<RunResult, InstanceError> {
    let instance = KnapsackInstance::new(weights, values, capacity)?;
    Ok(SaRunner::run(&instance, config))
}

/// Solves the instance with Bee Colony Optimization.
pub fn run_bee_colony(
    weights: &[f64],
    values: &[f64],
    capacity: f64,
    config: &BcoConfig,
) -> Result<RunResult, InstanceError> {
    let instance = KnapsackInstance::new(weights, values, capacity)?;
    Ok(BcoRunner::run(&instance, config))
}

/// Solves the instance with the Genetic Algorithm.
pub fn run_genetic_algorithm(
    weights: &[f64],
    values: &[f64],
    capacity: f64,
    config: &GaConfig,
) -> Result<RunResult, InstanceError> {
    let instance = KnapsackInstance::new(weights, values, capacity)?;
    Ok(GaRunner::run(&instance, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHTS: [f64; 4] = [2.0, 3.0, 4.0, 5.0];
    const VALUES: [f64; 4] = [3.0, 4.0, 5.0, 6.0];

    #[test]
    fn test_invalid_input_rejected_before_run() {
        let config = SaConfig::default().with_seed(1);
        assert_eq!(
            run_simulated_annealing(&[], &[], 5.0, &config),
            Err(InstanceError::Empty)
        );
        assert_eq!(
            run_bee_colony(&WEIGHTS, &VALUES[..3], 5.0, &BcoConfig::default()),
            Err(InstanceError::LengthMismatch {
                weights: 4,
                values: 3
            })
        );
        assert_eq!(
            run_genetic_algorithm(&WEIGHTS, &VALUES, -1.0, &GaConfig::default()),
            Err(InstanceError::NonPositiveCapacity(-1.0))
        );
    }

    #[test]
    fn test_all_three_agree_on_small_optimum() {
        let sa = run_simulated_annealing(&WEIGHTS, &VALUES, 5.0, &SaConfig::default().with_seed(42))
            .unwrap();
        let bco = run_bee_colony(&WEIGHTS, &VALUES, 5.0, &BcoConfig::default().with_seed(42))
            .unwrap();
        let ga =
            run_genetic_algorithm(&WEIGHTS, &VALUES, 5.0, &GaConfig::default().with_seed(42))
                .unwrap();

        for result in [&sa, &bco, &ga] {
            assert!((result.best_value - 7.0).abs() < 1e-12);
            assert!(result.best_weight <= 5.0 + 1e-12);
            assert_eq!(result.best.len(), 4);
        }
    }

    #[test]
    fn test_elapsed_is_recorded() {
        let result =
            run_bee_colony(&WEIGHTS, &VALUES, 5.0, &BcoConfig::default().with_seed(1)).unwrap();
        assert!(result.elapsed_seconds >= 0.0);
    }
}
