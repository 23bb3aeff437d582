//! SA configuration and cooling schedules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cooling schedule for temperature reduction.
///
/// Both schedules are monotonically cooling over the fixed iteration
/// budget; the temperature is floored at
/// [`min_temperature`](SaConfig::min_temperature) rather than used as a
/// stop condition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`, applied
    /// once per iteration.
    ///
    /// With the default budget of 5000 iterations, `alpha` close to 1
    /// (0.998–0.9995) keeps uphill moves available through the early
    /// portion of the run.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_k = T_0 - k * (T_0 - T_min) / iteration_limit`.
    ///
    /// Temperature decreases uniformly across the whole budget.
    Linear,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.999 }
    }
}

/// Configuration for the Simulated Annealing solver.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_iteration_limit(10_000)
///     .with_initial_temperature(200.0)
///     .with_cooling(CoolingSchedule::Linear)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Total number of iterations (neighbor evaluations). The run always
    /// executes exactly this many.
    pub iteration_limit: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. Cooling never goes below this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// How many iterations between best-value history samples.
    pub history_interval: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iteration_limit: 5000,
            initial_temperature: 100.0,
            min_temperature: 1e-6,
            cooling: CoolingSchedule::default(),
            history_interval: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iteration_limit(mut self, n: usize) -> Self {
        self.iteration_limit = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.iteration_limit == 0 {
            return Err("iteration_limit must be at least 1".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.history_interval == 0 {
            return Err("history_interval must be at least 1".into());
        }
        if let CoolingSchedule::Geometric { alpha } = self.cooling {
            if alpha <= 0.0 || alpha >= 1.0 {
                return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.iteration_limit, 5000);
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.min_temperature - 1e-6).abs() < 1e-15);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.999 });
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(SaConfig::default().with_iteration_limit(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_history_interval() {
        assert!(SaConfig::default()
            .with_history_interval(0)
            .validate()
            .is_err());
    }
}
