//! BCO configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Bee Colony solver.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::bco::BcoConfig;
///
/// let config = BcoConfig::default()
///     .with_num_bees(50)
///     .with_num_iterations(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BcoConfig {
    /// Number of bees (population size).
    pub num_bees: usize,

    /// Number of generations.
    pub num_iterations: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for BcoConfig {
    fn default() -> Self {
        Self {
            num_bees: 30,
            num_iterations: 200,
            seed: None,
        }
    }
}

impl BcoConfig {
    pub fn with_num_bees(mut self, n: usize) -> Self {
        self.num_bees = n;
        self
    }

    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_bees == 0 {
            return Err("num_bees must be at least 1".into());
        }
        if self.num_iterations == 0 {
            return Err("num_iterations must be at least 1".into());
        }
        Ok(())
    }
}
