//! Random demo instance generation.
//!
//! Not part of the optimization engine; produces small instances for demos
//! and benchmarks. The caller supplies the RNG, same as everywhere else in
//! the crate.

use rand::Rng;

/// Generates a random knapsack instance as `(weights, values, capacity)`.
///
/// Item count in `[5, 12]`, integer weights in `[5, 40]`, integer values in
/// `[10, 100]`, capacity a uniform integer in `[Σw / 3, Σw / 2]` (integer
/// division). The output always passes
/// [`KnapsackInstance::new`](crate::KnapsackInstance::new).
pub fn generate_random_instance<R: Rng>(rng: &mut R) -> (Vec<f64>, Vec<f64>, f64) {
    let n = rng.random_range(5..=12);
    let weights: Vec<u32> = (0..n).map(|_| rng.random_range(5..=40)).collect();
    let values: Vec<u32> = (0..n).map(|_| rng.random_range(10..=100)).collect();

    let total: u32 = weights.iter().sum();
    let capacity = rng.random_range(total / 3..=total / 2);

    (
        weights.into_iter().map(f64::from).collect(),
        values.into_iter().map(f64::from).collect(),
        f64::from(capacity),
    )
}
