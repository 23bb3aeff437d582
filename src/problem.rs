//! Problem representation and fitness evaluation.
//!
//! All three solvers share the same immutable [`KnapsackInstance`], the same
//! [`Solution`] bit-vector representation, and the same penalized fitness
//! function, which guarantees that their results are directly comparable.

use crate::error::InstanceError;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default linear penalty applied per unit of overweight.
///
/// Shared by all solvers run on the same instance; override with
/// [`KnapsackInstance::with_penalty_factor`].
pub const DEFAULT_PENALTY_FACTOR: f64 = 10.0;

/// A single knapsack item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Item weight. Positive and finite.
    pub weight: f64,
    /// Item value. Positive and finite.
    pub value: f64,
}

/// An immutable 0/1 knapsack problem instance.
///
/// Validated once at construction; solvers never re-check the invariants.
/// The instance is read-only for the duration of any solver call, so it can
/// be shared across threads running different solvers concurrently.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::KnapsackInstance;
///
/// let instance = KnapsackInstance::new(&[2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0], 5.0)?;
/// assert_eq!(instance.len(), 4);
/// # Ok::<(), knapsack_metaheur::InstanceError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackInstance {
    items: Vec<Item>,
    capacity: f64,
    penalty_factor: f64,
}

impl KnapsackInstance {
    /// Builds an instance from parallel weight and value slices.
    ///
    /// Fails fast on empty input, length mismatch, non-positive capacity,
    /// or a non-positive/non-finite item entry.
    pub fn new(weights: &[f64], values: &[f64], capacity: f64) -> Result<Self, InstanceError> {
        if weights.len() != values.len() {
            return Err(InstanceError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let items = weights
            .iter()
            .zip(values)
            .map(|(&weight, &value)| Item { weight, value })
            .collect();
        Self::from_items(items, capacity)
    }

    /// Builds an instance from a list of items.
    pub fn from_items(items: Vec<Item>, capacity: f64) -> Result<Self, InstanceError> {
        if items.is_empty() {
            return Err(InstanceError::Empty);
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(InstanceError::NonPositiveCapacity(capacity));
        }
        for (index, item) in items.iter().enumerate() {
            let ok = item.weight.is_finite()
                && item.weight > 0.0
                && item.value.is_finite()
                && item.value > 0.0;
            if !ok {
                return Err(InstanceError::InvalidItem { index });
            }
        }
        Ok(Self {
            items,
            capacity,
            penalty_factor: DEFAULT_PENALTY_FACTOR,
        })
    }

    /// Sets the overweight penalty factor (clamped to be non-negative).
    pub fn with_penalty_factor(mut self, factor: f64) -> Self {
        self.penalty_factor = factor.max(0.0);
        self
    }

    /// Number of items.
    #[allow(clippy::len_without_is_empty)] // a valid instance is never empty
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The items, in index order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The knapsack capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// The overweight penalty factor.
    pub fn penalty_factor(&self) -> f64 {
        self.penalty_factor
    }

    /// Evaluates a candidate solution.
    ///
    /// Returns the raw weight sum and the penalized value:
    /// `value = Σ v_i·b_i − max(0, weight − capacity) · penalty_factor`.
    /// The linear penalty makes overweight solutions score progressively
    /// worse instead of being rejected outright, so the search keeps a
    /// gradient back toward feasibility.
    ///
    /// Pure and deterministic; used identically by every solver.
    ///
    /// # Panics
    /// Panics if the solution length does not match the item count. That is
    /// a contract violation, not a recoverable condition.
    pub fn evaluate(&self, solution: &Solution) -> Evaluation {
        assert_eq!(
            solution.len(),
            self.items.len(),
            "solution length must match item count"
        );

        let mut weight = 0.0;
        let mut value = 0.0;
        for (item, selected) in self.items.iter().zip(solution.bits()) {
            if *selected {
                weight += item.weight;
                value += item.value;
            }
        }
        if weight > self.capacity {
            value -= (weight - self.capacity) * self.penalty_factor;
        }
        Evaluation { value, weight }
    }

    /// Penalized value of a solution. Higher is better.
    pub fn fitness(&self, solution: &Solution) -> f64 {
        self.evaluate(solution).value
    }

    /// Unpenalized weight sum of a solution.
    ///
    /// This is the figure reported in
    /// [`RunResult::best_weight`](crate::RunResult::best_weight): the
    /// physical weight of the packed items, with no penalty arithmetic.
    pub fn weight_of(&self, solution: &Solution) -> f64 {
        self.items
            .iter()
            .zip(solution.bits())
            .filter(|(_, &selected)| selected)
            .map(|(item, _)| item.weight)
            .sum()
    }

    /// Total weight of all items. Useful for sizing capacities.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }
}

/// Result of evaluating a [`Solution`] against a [`KnapsackInstance`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    /// Penalized total value. May be negative for overweight solutions.
    pub value: f64,
    /// Raw total weight, no penalty applied.
    pub weight: f64,
}

/// A candidate solution: one bit per item, set iff the item is packed.
///
/// Solutions are plain data. Solvers clone them freely and never mutate a
/// solution after recording it as a best-so-far.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    bits: Vec<bool>,
}

impl Solution {
    /// The empty packing: no items selected.
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// A uniformly random packing.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..n).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Wraps an explicit bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of bits (equals the instance item count).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the solution has zero bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether item `index` is selected.
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Flips the bit at `index`. The single move operator shared by all
    /// solvers' neighborhoods.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// The raw bits, in item-index order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Indices of the selected items.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| i)
    }

    /// Number of selected items.
    pub fn count_selected(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl fmt::Display for Solution {
    /// Renders as a 0/1 string, e.g. `1101`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
